//! Listing browser state machine.
//!
//! Every user interaction is a named [`BrowserEvent`] that produces exactly one
//! [`FetchTicket`]. Pages are requested with one item more than displayed; receiving
//! that extra item means another page exists. Results are applied only for the most
//! recent ticket, so a slow response for a superseded query is dropped.

use dioxus_logger::tracing;

use crate::{
    api::{ApiClient, RealEstateQuery},
    error::Error,
    model::real_estate::{BuildingType, RealEstateDto, SortDirection, TransactionType},
    service::sequence::{RequestSequencer, Ticket},
    store::RealEstateDirectory,
};

/// Advanced search bounds
#[derive(Debug, Clone, PartialEq)]
pub struct ListingFilter {
    pub building: BuildingType,
    pub size_min: u32,
    pub size_max: u32,
    pub price_min: u64,
    pub price_max: u64,
}

impl Default for ListingFilter {
    fn default() -> Self {
        let query = RealEstateQuery::default();

        Self {
            building: query.building,
            size_min: query.size_min,
            size_max: query.size_max,
            price_min: query.price_min,
            price_max: query.price_max,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BrowserEvent {
    PageChanged(usize),
    /// The search term settled after debouncing; resets to page 1
    SearchDebounced(String),
    /// Resets to page 1
    FilterChanged(ListingFilter),
    /// Resets to page 1
    SortChanged(SortDirection),
    /// Resets to page 1
    TransactionChanged(TransactionType),
    /// Re-issues the current query, e.g. after a failed fetch
    Retry,
}

/// A fetch the browser wants performed
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub ticket: Ticket,
    pub query: RealEstateQuery,
}

/// Entry of the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page { number: usize, active: bool },
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrowserState {
    /// 1-based
    pub page: usize,
    pub search: String,
    pub transaction: TransactionType,
    pub sort_direction: SortDirection,
    pub filter: ListingFilter,
    pub listings: Vec<RealEstateDto>,
    pub has_more: bool,
    /// Lower bound on the number of matching listings seen so far
    pub estimated_total: usize,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct ListingBrowser {
    state: BrowserState,
    page_size: usize,
    requests: RequestSequencer,
    directory: RealEstateDirectory,
}

impl ListingBrowser {
    /// Creates a browser showing `page_size` listings per page.
    ///
    /// # Arguments
    /// - `page_size` - Listings displayed per page; `page_size + 1` are requested
    /// - `directory` - Store updated with every page that is applied
    pub fn new(page_size: usize, directory: RealEstateDirectory) -> Self {
        Self {
            state: BrowserState {
                page: 1,
                search: String::new(),
                transaction: TransactionType::default(),
                sort_direction: SortDirection::default(),
                filter: ListingFilter::default(),
                listings: Vec::new(),
                has_more: false,
                estimated_total: 0,
                loading: false,
                error: None,
            },
            page_size: page_size.max(1),
            requests: RequestSequencer::new(),
            directory,
        }
    }

    /// Creates a browser with `search` and `transaction` restored from a URL query string.
    pub fn from_query_string(page_size: usize, directory: RealEstateDirectory, query: &str) -> Self {
        let mut browser = Self::new(page_size, directory);

        for (key, value) in url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "search" => browser.state.search = value.trim().to_string(),
                "transaction" => match TransactionType::parse(&value) {
                    Some(transaction) => browser.state.transaction = transaction,
                    None => tracing::debug!(value = %value, "Ignoring unknown transaction in URL"),
                },
                _ => {}
            }
        }

        browser
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Ticket for the initial load.
    pub fn start(&mut self) -> FetchTicket {
        self.handle(BrowserEvent::Retry)
    }

    /// Applies `event` and returns the single fetch it triggers.
    pub fn handle(&mut self, event: BrowserEvent) -> FetchTicket {
        match event {
            BrowserEvent::PageChanged(page) => self.state.page = page.max(1),
            BrowserEvent::SearchDebounced(term) => {
                self.state.search = term.trim().to_string();
                self.state.page = 1;
            }
            BrowserEvent::FilterChanged(filter) => {
                self.state.filter = filter;
                self.state.page = 1;
            }
            BrowserEvent::SortChanged(direction) => {
                self.state.sort_direction = direction;
                self.state.page = 1;
            }
            BrowserEvent::TransactionChanged(transaction) => {
                self.state.transaction = transaction;
                self.state.page = 1;
            }
            BrowserEvent::Retry => {}
        }

        self.state.loading = true;
        self.state.error = None;

        FetchTicket {
            ticket: self.requests.next(),
            query: self.query(),
        }
    }

    /// Query for the current state, over-fetching by one.
    pub fn query(&self) -> RealEstateQuery {
        let state = &self.state;

        RealEstateQuery {
            offset: (state.page - 1) * self.page_size,
            limit: self.page_size + 1,
            sort_direction: state.sort_direction,
            search: Some(state.search.clone()).filter(|s| !s.is_empty()),
            transaction: Some(state.transaction),
            building: state.filter.building,
            size_min: state.filter.size_min,
            size_max: state.filter.size_max,
            price_min: state.filter.price_min,
            price_max: state.filter.price_max,
        }
    }

    /// Applies the outcome of `fetch`.
    ///
    /// # Returns
    /// - `true` - The result belonged to the latest ticket and was applied
    /// - `false` - The ticket was superseded and the result discarded
    pub fn apply(&mut self, fetch: &FetchTicket, result: Result<Vec<RealEstateDto>, Error>) -> bool {
        if !self.requests.is_current(fetch.ticket) {
            tracing::debug!(ticket = fetch.ticket.value(), "Discarding stale listing page");
            return false;
        }

        self.state.loading = false;

        match result {
            Ok(mut listings) => {
                let received = listings.len();
                let has_more = received > self.page_size;
                listings.truncate(self.page_size);

                let page = self.state.page;
                let seen = if has_more {
                    page * self.page_size + 1
                } else {
                    (page - 1) * self.page_size + received
                };

                self.state.has_more = has_more;
                self.state.estimated_total = self.state.estimated_total.max(seen);
                self.directory.set(listings.clone());
                self.state.listings = listings;
            }
            Err(e) => {
                tracing::error!("Failed to load real estates: {}", e);
                self.state.error = Some(e.user_message());
            }
        }

        true
    }

    /// Shareable query string mirroring the search term and transaction type.
    pub fn query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        if !self.state.search.is_empty() {
            serializer.append_pair("search", &self.state.search);
        }
        serializer.append_pair("transaction", self.state.transaction.as_str());

        serializer.finish()
    }

    pub fn pagination(&self) -> Vec<PageItem> {
        pagination_window(self.state.page, self.state.has_more)
    }
}

/// Page links around `page`: up to two before it, two after it when more pages
/// exist, with the first page and ellipses marking gaps.
pub fn pagination_window(page: usize, has_more: bool) -> Vec<PageItem> {
    let page = page.max(1);
    let first = page.saturating_sub(2).max(1);
    let mut items = Vec::new();

    if first > 1 {
        items.push(PageItem::Page {
            number: 1,
            active: false,
        });
        items.push(PageItem::Ellipsis);
    }

    let last = if has_more { page + 2 } else { page };
    items.extend((first..=last).map(|number| PageItem::Page {
        number,
        active: number == page,
    }));

    if has_more {
        items.push(PageItem::Ellipsis);
    }

    items
}

/// Fetches the page described by `fetch` and applies it to `browser`.
pub async fn load(api: &ApiClient, browser: &mut ListingBrowser, fetch: &FetchTicket) -> bool {
    let result = api.fetch_real_estates(&fetch.query).await;

    browser.apply(fetch, result)
}
