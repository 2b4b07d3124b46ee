use gloo_timers::future::TimeoutFuture;
use icondata as i;
use leptos::{html::Div, prelude::*, task::spawn_local};
use leptos_icons::Icon;
use leptos_use::on_click_outside;
use portfolio_api_types::SearchResult;

use crate::api;
use crate::components::search_result::SearchResultRow;
use crate::i18n::{self, use_language};

const DEBOUNCE_MS: u32 = 300;
const MIN_QUERY_CHARS: usize = 2;

/// Monotonic ticket counter: whoever holds an old value knows it has been
/// superseded. The search box uses one for its debounce window and one for
/// lookups, so rapid keystrokes collapse to the single newest window and a
/// slow response for an earlier query can never overwrite the results of a
/// later one. The contact form reuses it to expire stale banner timers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Generation(u64);

impl Generation {
    pub(crate) fn advance(&mut self) {
        self.0 += 1;
    }

    pub(crate) fn current(&self) -> u64 {
        self.0
    }

    pub(crate) fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// A query is only worth sending once it has two characters after trimming.
pub(crate) fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (trimmed.chars().count() >= MIN_QUERY_CHARS).then(|| trimmed.to_string())
}

#[component]
pub fn SearchBox() -> impl IntoView {
    let lang = use_language();
    let container = NodeRef::<Div>::new();
    let (query, set_query) = signal(String::new());
    // None hides the panel entirely; an empty row list renders the
    // localized no-results placeholder for the query that produced it.
    let (results, set_results) = signal(None::<(String, Vec<SearchResult>)>);
    let (searching, set_searching) = signal(false);
    let debounce = StoredValue::new(Generation::default());
    let lookups = StoredValue::new(Generation::default());

    let run_lookup = move |raw: String| {
        // an explicit lookup supersedes any pending debounce window
        debounce.update_value(|g| g.advance());
        let Some(q) = normalize_query(&raw) else {
            // a response still in flight for an earlier query must not
            // reopen the panel after it was cleared
            lookups.update_value(|g| g.advance());
            set_searching.set(false);
            set_results.set(None);
            return;
        };
        lookups.update_value(|g| g.advance());
        let ticket = lookups.with_value(|g| g.current());
        set_searching.set(true);
        spawn_local(async move {
            let outcome = api::search(&q, lang).await;
            if !lookups.with_value(|g| g.is_current(ticket)) {
                // stale response for a superseded query
                return;
            }
            set_searching.set(false);
            match outcome {
                Ok(rows) => set_results.set(Some((q, rows))),
                Err(e) => {
                    log::error!("search failed: {e}");
                    set_results.set(None);
                }
            }
        });
    };

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        set_query.set(value.clone());
        debounce.update_value(|g| g.advance());
        let window = debounce.with_value(|g| g.current());
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if debounce.with_value(|g| g.is_current(window)) {
                run_lookup(value);
            }
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            run_lookup(query.get_untracked());
        }
    };

    let _ = on_click_outside(container, move |_| set_results.set(None));

    view! {
        <div class="search-container position-relative" node_ref=container>
            <div class="position-relative">
                <input
                    on:input=on_input
                    on:keydown=on_keydown
                    placeholder=i18n::search_placeholder(lang)
                    class="form-control search-box"
                    type="text"
                    prop:value=query
                />
                <span class="search-icon">
                    <Show
                        when=move || searching.get()
                        fallback=|| view! { <Icon icon=i::AiSearchOutlined /> }
                    >
                        <span class="spinner"><Icon icon=i::CgSpinner /></span>
                    </Show>
                </span>
            </div>
            {move || {
                results
                    .get()
                    .map(|(q, rows)| {
                        if rows.is_empty() {
                            view! {
                                <div class="search-results list-group">
                                    <div class="list-group-item text-center py-3">
                                        <Icon icon=i::AiSearchOutlined width="2em" height="2em" />
                                        <p class="mb-0 text-muted">{i18n::no_results(lang, &q)}</p>
                                    </div>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="search-results list-group">
                                    {rows
                                        .into_iter()
                                        .map(|row| view! { <SearchResultRow row=row /> })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_queries_are_rejected() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query(" a "), None);
        assert_eq!(normalize_query("ab"), Some("ab".to_string()));
        assert_eq!(normalize_query("  متجر  "), Some("متجر".to_string()));
        // two characters only after trimming counts
        assert_eq!(normalize_query(" ok "), Some("ok".to_string()));
    }

    #[test]
    fn rapid_keystrokes_collapse_to_the_newest_window() {
        let mut debounce = Generation::default();
        let mut windows = Vec::new();
        for _ in 0..5 {
            debounce.advance();
            windows.push(debounce.current());
        }
        let live: Vec<_> = windows
            .iter()
            .copied()
            .filter(|w| debounce.is_current(*w))
            .collect();
        assert_eq!(live, vec![5]);
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut lookups = Generation::default();
        lookups.advance();
        let ticket_a = lookups.current();
        lookups.advance();
        let ticket_b = lookups.current();

        // B's response arrives first and is rendered
        assert!(lookups.is_current(ticket_b));
        // A's late response must not overwrite it
        assert!(!lookups.is_current(ticket_a));
    }

    #[test]
    fn clearing_the_query_invalidates_in_flight_lookups() {
        let mut lookups = Generation::default();
        // "ab" is sent and its response is still in flight
        lookups.advance();
        let ticket = lookups.current();
        // the query shrinks below the minimum, the panel is cleared and the
        // clear itself takes a new ticket
        lookups.advance();
        // the slow "ab" response must not reopen the panel
        assert!(!lookups.is_current(ticket));
    }

    #[test]
    fn enter_supersedes_the_pending_window() {
        let mut debounce = Generation::default();
        debounce.advance();
        let pending = debounce.current();
        // an immediate lookup advances the counter, the timer finds its
        // window stale and does nothing
        debounce.advance();
        assert!(!debounce.is_current(pending));
    }
}
