//! Third-party embeds: the analytics tag and the comment widget.

use maud::{Markup, html};

/// Google Tag Manager container the site reports to.
pub const GTM_CONTAINER_ID: &str = "GTM-NQX93QR4";

/// Hidden GTM `<noscript>` iframe, placed at the top of `<body>`.
pub fn render() -> Markup {
    let src = format!("https://www.googletagmanager.com/ns.html?id={GTM_CONTAINER_ID}");
    html! {
        noscript {
            iframe src=(src) height="0" width="0" style="display:none;visibility:hidden" {}
        }
    }
}

/// utterances comment thread for a post page.
///
/// Renders nothing when no backing repository is configured.
pub fn render_comments(repo: &str) -> Markup {
    if repo.trim().is_empty() {
        return html! {};
    }
    html! {
        section.comments {
            script
                src="https://utteranc.es/client.js"
                repo=(repo)
                issue-term="pathname"
                theme="preferred-color-scheme"
                crossorigin="anonymous"
                async {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gtm_iframe_is_hidden() {
        let html = render().into_string();
        assert!(html.starts_with("<noscript>"));
        assert!(html.contains("ns.html?id=GTM-NQX93QR4"));
        assert!(html.contains("display:none"));
    }

    #[test]
    fn comments_need_a_repo() {
        assert_eq!(render_comments("").into_string(), "");
        assert_eq!(render_comments("   ").into_string(), "");
    }

    #[test]
    fn comments_embed_repo() {
        let html = render_comments("someone/blog-comments").into_string();
        assert!(html.contains("utteranc.es/client.js"));
        assert!(html.contains(r#"repo="someone/blog-comments""#));
        assert!(html.contains(r#"issue-term="pathname""#));
        assert!(html.contains("async></script>"));
    }

    #[test]
    fn comments_escape_repo() {
        let html = render_comments(r#"a"b/<c>"#).into_string();
        assert!(html.contains(r#"repo="a&quot;b/&lt;c&gt;""#));
        assert!(!html.contains("<c>"));
    }
}
