/*
 * abbreviations.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * End-to-end tests: Markdown in, HTML out, with the abbreviation transform.
 */

use abbr_core::markdown_to_html;

fn md2html(markdown: &str) -> String {
    markdown_to_html(markdown).unwrap()
}

#[test]
fn replaces_two_abbreviations() {
    let html = md2html(
        "The HTML specification is maintained by the W3C.\n\n\
         *[HTML]: HyperText Markup Language\n\
         *[W3C]: World Wide Web Consortium\n",
    );
    assert_eq!(
        html,
        "<p>The <abbr title=\"HyperText Markup Language\">HTML</abbr> specification is \
         maintained by the <abbr title=\"World Wide Web Consortium\">W3C</abbr>.</p>\n"
    );
}

#[test]
fn replaces_every_occurrence() {
    let html = md2html("HTML is HTML.\n\n*[HTML]: HyperText Markup Language\n");
    assert_eq!(
        html,
        "<p><abbr title=\"HyperText Markup Language\">HTML</abbr> is \
         <abbr title=\"HyperText Markup Language\">HTML</abbr>.</p>\n"
    );
}

#[test]
fn definition_without_occurrences() {
    let html = md2html(
        "This is a paragraph with no abbreviations.\n\n*[HTML]: HyperText Markup Language\n",
    );
    assert_eq!(html, "<p>This is a paragraph with no abbreviations.</p>\n");
}

#[test]
fn no_definitions() {
    let html = md2html("This is a paragraph with undefined HTML.\n");
    assert_eq!(html, "<p>This is a paragraph with undefined HTML.</p>\n");
}

#[test]
fn does_not_replace_inside_code_span() {
    let html = md2html(
        "This is some code: `<!doctype HTML>`\n\n*[HTML]: HyperText Markup Language\n",
    );
    assert_eq!(
        html,
        "<p>This is some code: <code>&lt;!doctype HTML&gt;</code></p>\n"
    );
}

#[test]
fn does_not_replace_inside_code_block() {
    let html = md2html("```\nHTML\n```\n\n*[HTML]: HyperText Markup Language\n");
    assert_eq!(html, "<pre><code>HTML\n</code></pre>\n");
}

#[test]
fn keeps_last_definition_of_duplicates() {
    let html = md2html(
        "Who invented HTML?\n\n\
         *[HTML]: HyperText Markup Language\n\
         *[HTML]: Horrible Text Markup Language\n",
    );
    assert_eq!(
        html,
        "<p>Who invented <abbr title=\"Horrible Text Markup Language\">HTML</abbr>?</p>\n"
    );
}

#[test]
fn is_case_sensitive() {
    let html = md2html("HTML is not html.\n\n*[HTML]: HyperText Markup Language\n");
    assert_eq!(
        html,
        "<p><abbr title=\"HyperText Markup Language\">HTML</abbr> is not html.</p>\n"
    );
}

#[test]
fn works_without_trailing_newline() {
    let html = md2html("Who invented HTML?\n\n*[HTML]: HyperText Markup Language");
    assert_eq!(
        html,
        "<p>Who invented <abbr title=\"HyperText Markup Language\">HTML</abbr>?</p>\n"
    );
}

#[test]
fn matches_whole_words_only() {
    let html = md2html("*[ID]: Identifier\n\nVALID ID IDs\n");
    assert_eq!(html, "<p>VALID <abbr title=\"Identifier\">ID</abbr> IDs</p>\n");
}

#[test]
fn definition_before_use() {
    let html = md2html("*[CSS]: Cascading Style Sheets\n\nStyled with CSS.\n");
    assert_eq!(
        html,
        "<p>Styled with <abbr title=\"Cascading Style Sheets\">CSS</abbr>.</p>\n"
    );
}

#[test]
fn replaces_inside_block_quote() {
    let html = md2html("> Uses CSS.\n\n*[CSS]: Cascading Style Sheets\n");
    assert_eq!(
        html,
        "<blockquote>\n<p>Uses <abbr title=\"Cascading Style Sheets\">CSS</abbr>.</p>\n\
         </blockquote>\n"
    );
}

#[test]
fn replaces_inside_heading_and_link() {
    let html = md2html(
        "# About HTML\n\n[HTML docs](https://example.com)\n\n*[HTML]: HyperText Markup Language\n",
    );
    assert_eq!(
        html,
        "<h1>About <abbr title=\"HyperText Markup Language\">HTML</abbr></h1>\n\
         <p><a href=\"https://example.com\"><abbr title=\"HyperText Markup Language\">HTML</abbr> \
         docs</a></p>\n"
    );
}

#[test]
fn emptied_block_quote_is_kept() {
    // Only the paragraph is pruned, not the container it leaves empty
    let html = md2html("> *[CSS]: Cascading Style Sheets\n\nCSS\n");
    assert_eq!(
        html,
        "<blockquote>\n</blockquote>\n\
         <p><abbr title=\"Cascading Style Sheets\">CSS</abbr></p>\n"
    );
}

#[test]
fn emptied_list_item_is_kept() {
    let html = md2html("- *[CSS]: Cascading Style Sheets\n- CSS\n");
    assert_eq!(
        html,
        "<ul>\n<li></li>\n<li><abbr title=\"Cascading Style Sheets\">CSS</abbr></li>\n</ul>\n"
    );
}

#[test]
fn text_before_definition_is_kept() {
    let html = md2html("See *[CSS]: Cascading Style Sheets\n\nCSS rocks.\n");
    assert_eq!(
        html,
        "<p>See </p>\n<p><abbr title=\"Cascading Style Sheets\">CSS</abbr> rocks.</p>\n"
    );
}

#[test]
fn expansion_is_escaped_in_title() {
    let html = md2html("*[TJ]: Tom & \"Jerry\"\n\nTJ\n");
    assert_eq!(
        html,
        "<p><abbr title=\"Tom &amp; &quot;Jerry&quot;\">TJ</abbr></p>\n"
    );
}

#[test]
fn mixed_document_snapshot() {
    let html = md2html(
        "# CSS and HTML\n\
         \n\
         > The W3C publishes HTML.\n\
         \n\
         - CSS selectors\n\
         - `HTML` in code\n\
         \n\
         *[HTML]: HyperText Markup Language\n\
         *[CSS]: Cascading Style Sheets\n\
         *[W3C]: World Wide Web Consortium\n",
    );
    insta::assert_snapshot!(html.trim_end(), @r#"
    <h1><abbr title="Cascading Style Sheets">CSS</abbr> and <abbr title="HyperText Markup Language">HTML</abbr></h1>
    <blockquote>
    <p>The <abbr title="World Wide Web Consortium">W3C</abbr> publishes <abbr title="HyperText Markup Language">HTML</abbr>.</p>
    </blockquote>
    <ul>
    <li><abbr title="Cascading Style Sheets">CSS</abbr> selectors</li>
    <li><code>HTML</code> in code</li>
    </ul>
    "#);
}

#[test]
fn non_ascii_identifier_is_not_a_definition() {
    let html = md2html("*[Größe]: size\n\nGröße\n");
    assert_eq!(html, "<p>*[Größe]: size</p>\n<p>Größe</p>\n");
}

#[test]
fn non_ascii_letter_is_a_word_boundary() {
    let html = md2html("*[HTML]: HyperText Markup Language\n\néHTML\n");
    assert_eq!(
        html,
        "<p>é<abbr title=\"HyperText Markup Language\">HTML</abbr></p>\n"
    );
}
