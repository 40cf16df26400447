//! Server-side rendering tests for the search input markup.

use dioxus::prelude::*;
use toolbar_search_dioxus::{SearchInput, SearchInputOptions, Spritemap};

#[component]
fn Themed(value: String, options: SearchInputOptions, sheet: String) -> Element {
    use_context_provider(|| Spritemap(sheet.clone()));
    rsx! {
        Harness { value, options }
    }
}

#[component]
fn Harness(value: String, options: SearchInputOptions) -> Element {
    rsx! {
        SearchInput {
            value,
            on_value_change: move |_: String| {},
            on_close_button_click: move |_: MouseEvent| {},
            options,
        }
    }
}

fn render(value: &str, options: SearchInputOptions) -> String {
    let mut dom =
        VirtualDom::new_with_props(Harness, HarnessProps { value: value.to_string(), options });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_with_sheet(value: &str, options: SearchInputOptions, sheet: &str) -> String {
    let mut dom = VirtualDom::new_with_props(
        Themed,
        ThemedProps { value: value.to_string(), options, sheet: sheet.to_string() },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// The opening tag that contains `needle`.
fn opening_tag<'a>(html: &'a str, needle: &str) -> &'a str {
    let at = html.find(needle).unwrap_or_else(|| panic!("{needle} not in {html}"));
    let start = html[..at].rfind('<').expect("tag start");
    let end = at + html[at..].find('>').expect("tag end");
    &html[start..=end]
}

#[test]
fn renders_field_and_both_buttons() {
    let html = render("my query", SearchInputOptions::default());
    assert!(html.contains("input-group-item"), "{html}");
    assert!(html.contains("form-control input-group-inset input-group-inset-after"), "{html}");
    assert!(html.contains("input-group-inset-item input-group-inset-item-after"), "{html}");
    assert!(html.contains("aria-label=\"Search\""), "{html}");
    assert!(html.contains("my query"), "{html}");
    assert!(html.contains("lexicon-icon-times"), "{html}");
    assert!(html.contains("lexicon-icon-search"), "{html}");
    assert!(html.contains("navbar-breakpoint-d-none"), "{html}");
    assert!(html.contains("type=\"submit\""), "{html}");
}

#[test]
fn only_search_omits_clear_button() {
    let html = render("", SearchInputOptions { only_search: true, ..Default::default() });
    assert!(!html.contains("lexicon-icon-times"), "{html}");
    assert!(!html.contains("navbar-breakpoint-d-none"), "{html}");
    assert!(html.contains("lexicon-icon-search"), "{html}");
}

#[test]
fn class_name_is_appended_to_container() {
    let html = render("", SearchInputOptions { class_name: Some("my-search".into()), ..Default::default() });
    assert!(html.contains("class=\"input-group my-search\""), "{html}");
}

#[test]
fn spritemap_goes_to_both_buttons() {
    let html = render("", SearchInputOptions { spritemap: Some("/icons.svg".into()), ..Default::default() });
    assert!(html.contains("/icons.svg#times"), "{html}");
    assert!(html.contains("/icons.svg#search"), "{html}");
}

#[test]
fn context_spritemap_is_the_fallback() {
    let html = render_with_sheet("", SearchInputOptions::default(), "/theme/icons.svg");
    assert!(html.contains("/theme/icons.svg#times"), "{html}");
    assert!(html.contains("/theme/icons.svg#search"), "{html}");

    let explicit = SearchInputOptions { spritemap: Some("/own.svg".into()), ..Default::default() };
    let html = render_with_sheet("", explicit, "/theme/icons.svg");
    assert!(html.contains("/own.svg#search"), "{html}");
    assert!(!html.contains("/theme/icons.svg"), "{html}");
}

#[test]
fn same_props_render_same_markup() {
    let opts = SearchInputOptions {
        disabled: true,
        only_search: false,
        spritemap: Some("icons.svg#".into()),
        class_name: Some("my-search".into()),
    };
    assert_eq!(render("q", opts.clone()), render("q", opts));
}

#[test]
fn disabled_reaches_field_and_submit_but_not_clear() {
    let html = render("q", SearchInputOptions { disabled: true, ..Default::default() });

    let input = opening_tag(&html, "<input");
    assert!(input.contains("disabled"), "{input}");

    let submit = opening_tag(&html, "type=\"submit\"");
    assert!(submit.contains("disabled"), "{submit}");

    let clear = opening_tag(&html, "type=\"button\"");
    assert!(clear.contains("navbar-breakpoint-d-none"), "{clear}");
    assert!(!clear.contains("disabled"), "clear button must stay enabled: {clear}");
}

#[test]
fn enabled_render_has_no_disabled_attribute() {
    let html = render("q", SearchInputOptions::default());
    assert!(!html.contains("disabled"), "{html}");
}

#[test]
fn sprite_reference_is_a_use_element() {
    let html = render("", SearchInputOptions { spritemap: Some("/icons.svg".into()), ..Default::default() });
    assert!(html.contains("<use href=\"/icons.svg#times\""), "{html}");
    assert!(html.contains("<use href=\"/icons.svg#search\""), "{html}");
}

#[test]
fn spritemap_is_escaped_in_markup() {
    let html = render(
        "",
        SearchInputOptions { spritemap: Some("/a\"><script>x</script>".into()), ..Default::default() },
    );
    assert!(!html.contains("<script>"), "{html}");
}
