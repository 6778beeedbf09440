//! Interactive search state.
//!
//! The query engine is stateless; a [`SearchSession`] owns what a search
//! screen remembers between keystrokes and calls the engine on every change.

use crate::models::{Catalog, Room};
use crate::query::{self, PriceRange, SearchParams};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SearchSession<'a> {
    catalog: &'a Catalog,
    search_term: String,
    suggestions: Vec<&'a str>,
    search_result: Option<&'a Room>,
    min_price: String,
    max_price: String,
    tag_search: String,
    tag_suggestions: Vec<&'a str>,
    filtered: Vec<&'a Room>,
    selected: Option<&'a Room>,
}

impl<'a> SearchSession<'a> {
    /// Start a session with empty inputs. With no bounds and no tag the list
    /// view holds the whole catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        let mut session = Self {
            catalog,
            search_term: String::new(),
            suggestions: Vec::new(),
            search_result: None,
            min_price: String::new(),
            max_price: String::new(),
            tag_search: String::new(),
            tag_suggestions: Vec::new(),
            filtered: Vec::new(),
            selected: None,
        };
        session.refresh();
        session
    }

    pub fn set_search_term(&mut self, text: &str) {
        self.search_term = text.to_string();
        self.suggestions = query::suggest(self.catalog, text);
        debug!("{} suggestions for {:?}", self.suggestions.len(), text);
    }

    /// Accept a suggested name as the search term.
    pub fn choose_suggestion(&mut self, name: &str) {
        self.search_term = name.to_string();
        self.suggestions.clear();
    }

    /// Exact-name search with the current term.
    pub fn search(&mut self) -> Option<&'a Room> {
        self.search_result = query::find_by_name(self.catalog, &self.search_term);
        self.search_result
    }

    pub fn set_min_price(&mut self, text: &str) {
        self.min_price = text.to_string();
        self.refresh();
    }

    pub fn set_max_price(&mut self, text: &str) {
        self.max_price = text.to_string();
        self.refresh();
    }

    pub fn set_tag_search(&mut self, text: &str) {
        self.tag_search = text.to_string();
        self.tag_suggestions = query::suggest_tags(self.catalog, text);
        self.refresh();
    }

    /// Re-run the list filter with the current inputs.
    pub fn refresh(&mut self) {
        let params = self.params();
        self.filtered = query::filter::filter_with(self.catalog, &params);
    }

    /// Select a room from the list for the detail view.
    pub fn view_room(&mut self, id: &str) -> Option<&'a Room> {
        self.selected = query::find_by_id(self.catalog, id);
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Current list-view parameters parsed from the raw inputs.
    pub fn params(&self) -> SearchParams {
        SearchParams::from_inputs(&self.min_price, &self.max_price, &self.tag_search)
    }

    pub fn price_range(&self) -> PriceRange {
        self.params().price
    }

    /// The filtered list in display order.
    pub fn sorted_rooms(&self) -> Vec<&'a Room> {
        query::sort_for_display(&self.filtered)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn suggestions(&self) -> &[&'a str] {
        &self.suggestions
    }

    pub fn tag_suggestions(&self) -> &[&'a str] {
        &self.tag_suggestions
    }

    pub fn search_result(&self) -> Option<&'a Room> {
        self.search_result
    }

    pub fn filtered_rooms(&self) -> &[&'a Room] {
        &self.filtered
    }

    pub fn selected_room(&self) -> Option<&'a Room> {
        self.selected
    }

    pub fn tag_search(&self) -> &str {
        &self.tag_search
    }
}
