//! Controller for the paginated, searchable customer list.
//!
//! The controller owns the canonical query state (page, search, sort,
//! birthday filter) and the last successfully displayed page. All state
//! transitions are synchronous; fetching is split into `begin_fetch` /
//! `apply_fetch` so that responses arriving out of order can be detected and
//! discarded, with `refresh` composing the two around a repository call.

use std::time::Duration;

use tokio::time::Instant;

use crate::domain::customer::Customer;
use crate::domain::types::{BirthdayFilter, SortDirection, SortField};
use crate::pagination::Paginated;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CustomerListQuery, CustomerReader};

/// Quiet window between the last keystroke and the search commit.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// What the list screen renders: the displayed page plus load/error state.
///
/// `customers` always holds the last page that loaded successfully; a failed
/// fetch sets `error` without clearing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListView {
    pub customers: Paginated<Customer>,
    pub error: Option<String>,
    pub loading: bool,
}

pub struct CustomerListController<R> {
    repo: R,
    page: usize,
    search_input: String,
    committed_search: String,
    sort_field: SortField,
    sort_direction: SortDirection,
    birthday: BirthdayFilter,
    debounce_deadline: Option<Instant>,
    issued_seq: u64,
    issued_page: usize,
    view: ListView,
}

impl<R> CustomerListController<R>
where
    R: CustomerReader,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            page: 1,
            search_input: String::new(),
            committed_search: String::new(),
            sort_field: SortField::FullName,
            sort_direction: SortDirection::Asc,
            birthday: BirthdayFilter::Any,
            debounce_deadline: None,
            issued_seq: 0,
            issued_page: 1,
            view: ListView::default(),
        }
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn committed_search(&self) -> &str {
        &self.committed_search
    }

    pub fn sort(&self) -> (SortField, SortDirection) {
        (self.sort_field, self.sort_direction)
    }

    pub fn birthday_filter(&self) -> BirthdayFilter {
        self.birthday
    }

    /// Records a keystroke and re-arms the debounce deadline. The committed
    /// search and the page are untouched until the window elapses.
    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
        self.debounce_deadline = Some(Instant::now() + SEARCH_DEBOUNCE);
    }

    /// Commits the raw search input if the armed deadline has elapsed.
    ///
    /// Returns whether a commit happened. A superseded deadline can never
    /// commit, since arming replaces the previous deadline outright. The
    /// page resets to 1 only when the committed value actually changes.
    pub fn flush_search(&mut self, now: Instant) -> bool {
        match self.debounce_deadline {
            Some(deadline) if now >= deadline => {
                self.debounce_deadline = None;
                if self.search_input != self.committed_search {
                    self.committed_search = self.search_input.clone();
                    self.page = 1;
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Sleeps until the armed deadline and commits. Returns whether the
    /// committed search changed; `false` when no deadline was armed.
    pub async fn settle_search(&mut self) -> bool {
        let Some(deadline) = self.debounce_deadline else {
            return false;
        };
        tokio::time::sleep_until(deadline).await;
        self.flush_search(Instant::now())
    }

    pub fn set_birthday_filter(&mut self, filter: BirthdayFilter) {
        self.birthday = filter;
        self.page = 1;
    }

    /// Sorting by the current column flips the direction; a new column
    /// starts ascending. Either way the page resets to 1.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
        self.page = 1;
    }

    /// Moves to the requested page, clamped to `[1, max(total_pages, 1)]`.
    /// No other state is touched.
    pub fn set_page(&mut self, page: usize) {
        let upper = self.view.customers.total_pages.max(1);
        self.page = page.clamp(1, upper);
    }

    /// The canonical query for the current state, with the committed (not
    /// raw) search term.
    pub fn current_query(&self) -> CustomerListQuery {
        CustomerListQuery::new()
            .page(self.page)
            .search(self.committed_search.clone())
            .order_by(self.sort_field, self.sort_direction)
            .birthday(self.birthday)
    }

    /// Issues a new fetch: bumps the sequence counter, marks the view as
    /// loading, and returns the sequence together with the query to run.
    pub fn begin_fetch(&mut self) -> (u64, CustomerListQuery) {
        self.issued_seq += 1;
        self.issued_page = self.page;
        self.view.loading = true;
        (self.issued_seq, self.current_query())
    }

    /// Applies a fetch result, unless a newer fetch has been issued since.
    ///
    /// Returns whether the result was applied. On success the displayed page
    /// is replaced and any previous error cleared; on failure the error is
    /// recorded and the previously displayed page kept.
    pub fn apply_fetch(
        &mut self,
        seq: u64,
        result: RepositoryResult<(usize, Vec<Customer>)>,
    ) -> bool {
        if seq != self.issued_seq {
            return false;
        }
        self.view.loading = false;

        match result {
            Ok((total, customers)) => {
                self.view.customers = Paginated::new(customers, self.issued_page, total);
                self.view.error = None;
            }
            Err(err) => {
                log::error!("Failed to load customers: {err}");
                self.view.error = Some(err.to_string());
            }
        }
        true
    }

    /// Fetches the current query and applies the result.
    pub async fn refresh(&mut self) -> bool {
        let (seq, query) = self.begin_fetch();
        let result = self.repo.list_customers(query).await;
        self.apply_fetch(seq, result)
    }
}
