use serde::Serialize;

/// Fixed guide catalog, in display order.
pub(crate) const GUIDES: [Guide; 5] = [
    Guide::new(1, "Getting Started with SvelteKit"),
    Guide::new(2, "Building a SvelteKit Application"),
    Guide::new(3, "Deploying SvelteKit Apps"),
    Guide::new(4, "SvelteKit Routing"),
    Guide::new(5, "State Management in SvelteKit"),
];

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Guide {
    id: u32,
    title: &'static str,
}

impl Guide {
    const fn new(id: u32, title: &'static str) -> Self {
        Self { id, title }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct GuideList {
    guides: &'static [Guide],
}

impl Default for GuideList {
    fn default() -> Self {
        Self { guides: &GUIDES }
    }
}
