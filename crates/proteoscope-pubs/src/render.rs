//! HTML fragments for the publication list.

use crate::fetcher::Publication;

const PUBMED_URL: &str = "https://pubmed.ncbi.nlm.nih.gov";

/// Linked citation list, one `<li>` per publication in fetch order.
pub fn render_publication_list(publications: &[Publication]) -> String {
    if publications.is_empty() {
        return r#"<p class="publications-empty">No publications found.</p>"#.to_string();
    }

    let items: String = publications
        .iter()
        .map(|p| {
            format!(
                r#"<li><a href="{}/{}/" target="_blank" rel="noopener">{}</a></li>"#,
                PUBMED_URL,
                p.pmid,
                html_escape(&p.title)
            )
        })
        .collect();

    format!(r#"<ul class="publications">{}</ul>"#, items)
}

/// Visible notice shown in place of the list when the lookup services
/// could not be reached.
pub fn render_unavailable_notice() -> String {
    r#"<p class="publications-unavailable">Publications are currently unavailable.</p>"#.to_string()
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_items_link_to_pubmed_in_order() {
        let html = render_publication_list(&[
            Publication { pmid: 11146632, title: "First title".into() },
            Publication { pmid: 12150907, title: "Second title".into() },
        ]);

        assert!(html.starts_with(r#"<ul class="publications">"#));
        assert!(html.contains(r#"href="https://pubmed.ncbi.nlm.nih.gov/11146632/""#));
        assert!(html.contains(r#"href="https://pubmed.ncbi.nlm.nih.gov/12150907/""#));
        assert!(
            html.find("11146632").unwrap() < html.find("12150907").unwrap(),
            "citation order must match fetch order"
        );
    }

    #[test]
    fn empty_list_renders_an_explicit_line() {
        let html = render_publication_list(&[]);
        assert!(html.contains("No publications found"));
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn titles_are_html_escaped() {
        let html = render_publication_list(&[Publication {
            pmid: 1,
            title: r#"TGF-<beta> & "friends""#.into(),
        }]);
        assert!(html.contains("TGF-&lt;beta&gt; &amp; &quot;friends&quot;"));
        assert!(!html.contains("<beta>"));
    }

    #[test]
    fn unavailable_notice_is_visible_markup() {
        assert!(render_unavailable_notice().contains("publications-unavailable"));
    }
}
