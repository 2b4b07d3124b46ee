use icondata as i;
use leptos::prelude::*;
use leptos_icons::Icon;
use portfolio_api_types::SearchResult;

use crate::components::lazy_image::LazyImage;

const DESCRIPTION_CHARS: usize = 100;

/// Char-based truncation so Arabic descriptions never get split inside a
/// code point.
pub(crate) fn truncate_description(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[component]
pub fn SearchResultRow(row: SearchResult) -> impl IntoView {
    let href = row.detail_url();
    let description = truncate_description(&row.description, DESCRIPTION_CHARS);
    let title = row.title.clone();
    let thumbnail = match row.image_url {
        Some(url) => view! {
            <LazyImage src=url alt=row.title class="rounded search-result-thumb" />
        }
        .into_any(),
        None => view! {
            <div class="bg-light rounded d-flex align-items-center justify-content-center search-result-thumb">
                <Icon icon=i::FaCodeSolid />
            </div>
        }
        .into_any(),
    };
    view! {
        <a href=href class="list-group-item list-group-item-action">
            <div class="search-result-item d-flex align-items-center gap-2">
                {thumbnail}
                <div class="search-result-content">
                    <h6 class="search-result-title mb-0">{title}</h6>
                    <p class="search-result-description text-muted mb-0">{description}</p>
                </div>
            </div>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_descriptions_pass_through() {
        assert_eq!(truncate_description("Bar", 100), "Bar");
    }

    #[test]
    fn long_descriptions_get_an_ellipsis() {
        let long = "a".repeat(150);
        let truncated = truncate_description(&long, 100);
        assert_eq!(truncated.chars().count(), 101);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn truncation_is_multibyte_safe() {
        let arabic = "م".repeat(150);
        let truncated = truncate_description(&arabic, 100);
        assert!(truncated.ends_with('…'));
        assert_eq!(truncated.chars().count(), 101);
    }
}
