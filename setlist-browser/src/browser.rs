use crate::export::{self, CsvExport, InquiryLink};
use crate::preferences::{
    COLLAPSED_SECTIONS_KEY, PreferenceStore, VIEW_MODE_KEY, decode_collapsed_sections,
    decode_view_mode, encode_collapsed_sections,
};
use crate::scroll::{PendingScroll, ScrollAnchor};
use crate::view::{self, SectionGroup, TitleCollator};
use setlist_core::filter::{FilterState, SortMode, ViewMode};
use setlist_core::section::Section;
use setlist_core::song::Song;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Header height used until the UI reports a real one.
pub const DEFAULT_STICKY_OFFSET: f64 = 96.0;

pub const DEFAULT_CONTACT_PAGE: &str = "/contact";

/// Interactive view state over a parsed catalog.
///
/// Owns favorites, filters, view mode and section collapse state, and
/// derives the filtered, grouped and flat views on demand. View mode and
/// collapsed sections are persisted through `S`; favorites live only as
/// long as the browser.
pub struct Browser<S: PreferenceStore> {
    songs: Arc<[Song]>,
    favorites: Vec<String>,
    filters: FilterState,
    view_mode: ViewMode,
    collapsed: BTreeSet<Section>,
    hydrated: bool,
    sticky_offset: f64,
    contact_page: String,
    collator: TitleCollator,
    store: S,
}

impl<S: PreferenceStore> Browser<S> {
    /// A browser in its pre-hydration state: list view, every section
    /// collapsed, nothing read from the store yet.
    pub fn new(songs: impl Into<Arc<[Song]>>, store: S) -> Self {
        Self {
            songs: songs.into(),
            favorites: Vec::new(),
            filters: FilterState::default(),
            view_mode: ViewMode::default(),
            collapsed: Section::ALL.into_iter().collect(),
            hydrated: false,
            sticky_offset: DEFAULT_STICKY_OFFSET,
            contact_page: DEFAULT_CONTACT_PAGE.to_owned(),
            collator: TitleCollator::new(),
            store,
        }
    }

    /// `new` followed by `hydrate`.
    pub fn mount(songs: impl Into<Arc<[Song]>>, store: S) -> Self {
        let mut browser = Self::new(songs, store);
        browser.hydrate();
        browser
    }

    pub fn with_contact_page(mut self, contact_page: impl Into<String>) -> Self {
        self.contact_page = contact_page.into();
        self
    }

    /// Reconcile defaults with stored preferences. Runs once; later calls
    /// do nothing.
    pub fn hydrate(&mut self) {
        if self.hydrated {
            return;
        }

        match self.store.get(VIEW_MODE_KEY) {
            Ok(Some(raw)) => match decode_view_mode(&raw) {
                Ok(mode) => self.view_mode = mode,
                Err(e) => warn!("Ignoring stored view mode: {}", e),
            },
            Ok(None) => {}
            Err(e) => warn!("Could not read view mode: {}", e),
        }

        match self.store.get(COLLAPSED_SECTIONS_KEY) {
            Ok(Some(raw)) => match decode_collapsed_sections(&raw) {
                Ok(sections) => self.collapsed = sections,
                Err(e) => warn!("Ignoring stored collapsed sections: {}", e),
            },
            Ok(None) => {}
            Err(e) => warn!("Could not read collapsed sections: {}", e),
        }

        // Motown always starts collapsed
        self.collapsed.insert(Section::FiftiesSixtiesMotown);
        self.hydrated = true;

        info!(
            "Browser hydrated: {} songs, {} view, {} sections collapsed",
            self.songs.len(),
            self.view_mode,
            self.collapsed.len()
        );

        self.persist_view_mode();
        self.persist_collapsed();
    }

    // State accessors

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Favorited ids in the order they were added.
    pub fn favorite_ids(&self) -> &[String] {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    pub fn collapsed_sections(&self) -> &BTreeSet<Section> {
        &self.collapsed
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn is_search_active(&self) -> bool {
        self.filters.is_search_active()
    }

    pub fn sticky_offset(&self) -> f64 {
        self.sticky_offset
    }

    pub fn contact_page(&self) -> &str {
        &self.contact_page
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // Derived views

    pub fn filtered_songs(&self) -> Vec<&Song> {
        view::filter_songs(&self.songs, &self.filters)
    }

    pub fn grouped_songs(&self) -> Vec<SectionGroup<'_>> {
        view::group_songs(&self.filtered_songs(), self.filters.sort, &self.collator)
    }

    /// Grouped songs flattened in section order, as shown by the grid view.
    pub fn flat_sorted_songs(&self) -> Vec<&Song> {
        view::flatten(&self.grouped_songs())
    }

    pub fn result_count(&self) -> usize {
        self.filtered_songs().len()
    }

    /// Favorited songs in catalog order.
    pub fn favorite_songs(&self) -> Vec<&Song> {
        self.songs.iter().filter(|s| self.is_favorite(&s.id)).collect()
    }

    /// Every section renders expanded while a search is active, whatever
    /// the stored collapse state says.
    pub fn is_section_expanded(&self, section: Section) -> bool {
        self.is_search_active() || !self.collapsed.contains(&section)
    }

    // Actions

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filters.search = term.into();
        debug!("Search set to {:?}", self.filters.search);
    }

    /// Set the search term and capture a scroll correction for the caller
    /// to apply after the next layout. Only a non-empty search yields one.
    pub fn set_search_anchored<A: ScrollAnchor + ?Sized>(
        &mut self,
        term: impl Into<String>,
        anchor: &A,
    ) -> Option<PendingScroll> {
        let pending = PendingScroll::capture(anchor);
        self.set_search(term);
        if self.is_search_active() { pending } else { None }
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.filters.sort = sort;
    }

    /// Returns whether the song is a favorite afterwards.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        if let Some(pos) = self.favorites.iter().position(|f| f == id) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(id.to_owned());
            true
        }
    }

    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
    }

    /// Flip one section. Ignored while a search is active.
    pub fn toggle_section(&mut self, section: Section) {
        if self.is_search_active() {
            debug!("Ignoring toggle of {} during search", section);
            return;
        }
        if !self.collapsed.remove(&section) {
            self.collapsed.insert(section);
        }
        self.persist_collapsed();
    }

    pub fn expand_all(&mut self) {
        self.collapsed.clear();
        self.persist_collapsed();
    }

    /// Collapse the sections that currently have results.
    pub fn collapse_all(&mut self) {
        self.collapsed = self.grouped_songs().iter().map(|g| g.section).collect();
        self.persist_collapsed();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.persist_view_mode();
    }

    pub fn set_sticky_offset(&mut self, offset: f64) {
        if offset.is_finite() && offset >= 0.0 {
            self.sticky_offset = offset;
        }
    }

    pub fn export_favorites_as_text(&self) -> String {
        export::songs_as_text(self.favorite_songs())
    }

    pub fn export_favorites_as_csv(&self) -> String {
        export::songs_as_csv(self.favorite_songs())
    }

    pub fn export_favorites_csv_file(&self) -> CsvExport {
        export::csv_export(self.favorite_songs())
    }

    /// Encoded favorites parameter and the contact URL carrying it.
    pub fn start_inquiry(&self) -> InquiryLink {
        export::inquiry_link(&self.contact_page, &self.favorites)
    }

    fn persist_view_mode(&mut self) {
        if let Err(e) = self.store.set(VIEW_MODE_KEY, self.view_mode.as_str()) {
            warn!("Could not save view mode: {}", e);
        }
    }

    fn persist_collapsed(&mut self) {
        if !self.hydrated {
            return;
        }
        let encoded = encode_collapsed_sections(&self.collapsed);
        if let Err(e) = self.store.set(COLLAPSED_SECTIONS_KEY, &encoded) {
            warn!("Could not save collapsed sections: {}", e);
        }
    }
}
