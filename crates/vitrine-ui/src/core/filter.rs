//! Client-side card filtering.
//!
//! # Design
//! - One logical value per filter; the desktop bar and the drawer both render it.
//! - Criteria combine conjunctively; an empty criterion matches everything.
//! - Attribute filters compare exactly; search is a case-insensitive substring.

use crate::core::catalog::{CardRecord, FilterOptions};

/// Filter dimension exposed as a control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterField {
    /// Free-text search box.
    Search,
    /// Category select.
    Category,
    /// Media type select.
    Media,
    /// Date select.
    Date,
}

/// Where a filter control is rendered. Both views share one value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterView {
    /// Inline filter bar on wide viewports.
    Desktop,
    /// Filter block inside the navigation drawer.
    Drawer,
}

impl FilterView {
    /// Prefix used for element ids so both views stay addressable.
    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Drawer => "drawer",
        }
    }
}

/// Current filter values.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Search text as typed.
    pub search: String,
    /// Exact category, if any.
    pub category: Option<String>,
    /// Exact media type, if any.
    pub media: Option<String>,
    /// Exact date, if any.
    pub date: Option<String>,
}

impl FilterCriteria {
    /// Store a control value; an empty string clears the criterion.
    pub fn set(&mut self, field: FilterField, value: &str) {
        let optional = (!value.is_empty()).then(|| value.to_string());
        match field {
            FilterField::Search => self.search = value.to_string(),
            FilterField::Category => self.category = optional,
            FilterField::Media => self.media = optional,
            FilterField::Date => self.date = optional,
        }
    }

    /// Value to render in a control for `field` (empty when unset).
    #[must_use]
    pub fn value(&self, field: FilterField) -> &str {
        match field {
            FilterField::Search => &self.search,
            FilterField::Category => self.category.as_deref().unwrap_or_default(),
            FilterField::Media => self.media.as_deref().unwrap_or_default(),
            FilterField::Date => self.date.as_deref().unwrap_or_default(),
        }
    }

    /// Whether no criterion is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.category.is_none()
            && self.media.is_none()
            && self.date.is_none()
    }

    /// Check a card against every active criterion.
    #[must_use]
    pub fn matches(&self, card: &CardRecord) -> bool {
        let search_ok = self.search.is_empty()
            || card
                .text
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        search_ok
            && exact(self.category.as_deref(), &card.category)
            && exact(self.media.as_deref(), &card.media)
            && exact(self.date.as_deref(), &card.date)
    }
}

fn exact(wanted: Option<&str>, actual: &str) -> bool {
    wanted.is_none_or(|wanted| wanted == actual)
}

/// Result of a filter pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FilterSummary {
    /// Cards left visible.
    pub visible: usize,
    /// Cards considered.
    pub total: usize,
}

impl FilterSummary {
    /// The empty-state indicator shows exactly when nothing matched.
    #[must_use]
    pub const fn no_results(self) -> bool {
        self.visible == 0
    }
}

/// Recompute visibility for every card.
pub fn apply_filters(cards: &mut [CardRecord], criteria: &FilterCriteria) -> FilterSummary {
    let mut visible = 0;
    for card in cards.iter_mut() {
        card.visible = criteria.matches(card);
        if card.visible {
            visible += 1;
        }
    }
    FilterSummary {
        visible,
        total: cards.len(),
    }
}

/// Filter slice of the app store.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Shared criteria bound to both control views.
    pub criteria: FilterCriteria,
    /// Fixed card set with current visibility.
    pub cards: Vec<CardRecord>,
    /// Select options derived from the cards.
    pub options: FilterOptions,
    /// Outcome of the last pass.
    pub summary: FilterSummary,
}

impl FilterState {
    /// Load the card set, clear every control, and run the initial pass.
    #[must_use]
    pub fn with_cards(cards: Vec<CardRecord>) -> Self {
        let options = FilterOptions::from_cards(&cards);
        let mut state = Self {
            criteria: FilterCriteria::default(),
            cards,
            options,
            summary: FilterSummary::default(),
        };
        state.reset();
        state
    }

    /// Clear all criteria and show every card.
    pub fn reset(&mut self) {
        self.criteria = FilterCriteria::default();
        self.apply();
    }

    /// Update one criterion from whichever view changed, then re-filter.
    pub fn update(&mut self, field: FilterField, value: &str) {
        self.criteria.set(field, value);
        self.apply();
    }

    /// Re-run the filter pass with the current criteria.
    pub fn apply(&mut self) -> FilterSummary {
        self.summary = apply_filters(&mut self.cards, &self.criteria);
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::CardSeed;

    impl FilterState {
        fn visible_ids(&self) -> Vec<&str> {
            self.cards
                .iter()
                .filter(|card| card.visible)
                .map(|card| card.id.as_str())
                .collect()
        }
    }

    fn card(id: &str, title: &str, category: &str, media: &str, date: &str) -> CardRecord {
        CardRecord::from(CardSeed {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: category.into(),
            media: media.into(),
            date: date.into(),
            image: None,
        })
    }

    fn sample() -> FilterState {
        FilterState::with_cards(vec![
            card("sunset", "Sunset Beach", "nature", "photo", "2024-01-01"),
            card("city", "City Lights", "urban", "video", "2024-02-01"),
        ])
    }

    #[test]
    fn category_filter_keeps_only_matching_card() {
        let mut state = sample();
        state.update(FilterField::Category, "nature");
        assert_eq!(state.visible_ids(), vec!["sunset"]);
        assert!(!state.summary.no_results());
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut state = sample();
        state.update(FilterField::Search, "SUNSET");
        assert_eq!(state.visible_ids(), vec!["sunset"]);
        state.update(FilterField::Search, "lights");
        assert_eq!(state.visible_ids(), vec!["city"]);
    }

    #[test]
    fn criteria_combine_conjunctively() {
        let mut state = sample();
        state.update(FilterField::Media, "video");
        state.update(FilterField::Date, "2024-01-01");
        assert!(state.visible_ids().is_empty());
        assert!(state.summary.no_results());

        state.update(FilterField::Date, "2024-02-01");
        assert_eq!(state.visible_ids(), vec!["city"]);
    }

    #[test]
    fn every_combination_matches_policy() {
        let cards = sample().cards;
        let searches = ["", "sun", "CITY", "missing"];
        let categories = ["", "nature", "urban"];
        let media = ["", "photo", "video"];
        let dates = ["", "2024-01-01", "2024-02-01"];
        for search in searches {
            for category in categories {
                for medium in media {
                    for date in dates {
                        let mut criteria = FilterCriteria::default();
                        criteria.set(FilterField::Search, search);
                        criteria.set(FilterField::Category, category);
                        criteria.set(FilterField::Media, medium);
                        criteria.set(FilterField::Date, date);
                        let mut working = cards.clone();
                        let summary = apply_filters(&mut working, &criteria);
                        for card in &working {
                            let expected = (search.is_empty()
                                || card.text.to_lowercase().contains(&search.to_lowercase()))
                                && (category.is_empty() || card.category == category)
                                && (medium.is_empty() || card.media == medium)
                                && (date.is_empty() || card.date == date);
                            assert_eq!(card.visible, expected, "{criteria:?} on {}", card.id);
                        }
                        let shown = working.iter().filter(|card| card.visible).count();
                        assert_eq!(summary.visible, shown);
                        assert_eq!(summary.no_results(), shown == 0);
                    }
                }
            }
        }
    }

    #[test]
    fn date_match_is_exact_not_ranged() {
        let mut state = sample();
        state.update(FilterField::Date, "2024-01");
        assert!(state.summary.no_results());
    }

    #[test]
    fn clearing_a_select_restores_cards() {
        let mut state = sample();
        state.update(FilterField::Category, "urban");
        state.update(FilterField::Category, "");
        assert_eq!(state.criteria.category, None);
        assert_eq!(state.summary.visible, 2);
    }

    #[test]
    fn reset_clears_shared_value_for_both_views() {
        let mut state = sample();
        state.update(FilterField::Search, "city");
        state.update(FilterField::Media, "video");
        state.reset();
        assert!(state.criteria.is_empty());
        assert_eq!(state.criteria.value(FilterField::Search), "");
        assert_eq!(state.criteria.value(FilterField::Media), "");
        assert_eq!(state.summary.visible, state.summary.total);
    }

    #[test]
    fn empty_grid_reports_no_results() {
        let state = FilterState::with_cards(Vec::new());
        assert!(state.summary.no_results());
    }
}
