use crate::catalog::CatalogItem;
use crate::core::action::Effect;
use crate::core::resource::Resource;

/// State behind the search screen.
#[derive(Debug, Default)]
pub struct SearchViewModel {
    pub results: Resource<Vec<CatalogItem>>,
    /// Last query sent to the catalog.
    pub query: String,
    started: bool,
}

impl SearchViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called whenever the search screen is shown. The first visit runs the
    /// default query so the screen isn't blank.
    pub fn on_enter(&mut self, default_query: &str) -> Effect {
        if self.started {
            return Effect::None;
        }
        self.search(default_query)
    }

    /// Start a search. Blank queries are ignored.
    pub fn search(&mut self, query: &str) -> Effect {
        let query = query.trim();
        if query.is_empty() {
            return Effect::None;
        }
        self.started = true;
        self.query = query.to_string();
        self.results = Resource::Loading;
        Effect::Search(self.query.clone())
    }

    pub fn on_results(&mut self, results: Resource<Vec<CatalogItem>>) {
        self.results = results;
    }

    pub fn is_loading(&self) -> bool {
        self.results.is_loading()
    }
}
