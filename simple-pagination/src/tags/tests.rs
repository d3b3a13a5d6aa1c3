use super::*;
use crate::request::Request;
use crate::settings::Settings;

fn entries(count: u32) -> Vec<u32> {
    (1..=count).collect()
}

fn plain_settings() -> Settings {
    Settings::default()
        .with_first_label("First")
        .with_previous_label("Prev")
        .with_next_label("Next")
        .with_last_label("Last")
}

fn paginate(
    tag: &str,
    ctx: &mut TemplateContext<'_, u32>,
) -> Result<String, RenderError> {
    parse_tag(tag)?.render(ctx)
}

// =========================================================================
// PARSING
// =========================================================================

#[test]
fn test_parse_known_tags() {
    assert_eq!(parse_tag("show_pages").unwrap(), Node::ShowPages(ShowPagesNode));
    assert_eq!(
        parse_tag("  show_pageitems  ").unwrap(),
        Node::ShowPageItems(ShowPageItemsNode)
    );

    let node = parse_tag("paginate 20 entries as page_entries").unwrap();
    assert_eq!(node.name(), "paginate");
    let Node::Paginate(node) = node else {
        panic!("expected paginate node");
    };
    assert_eq!(node.args().var_name, "page_entries");
}

#[test]
fn test_parse_errors() {
    assert_eq!(parse_tag("   ").unwrap_err(), TagSyntaxError::EmptyTag);
    assert_eq!(
        parse_tag("paginate").unwrap_err(),
        TagSyntaxError::MissingArguments {
            tag: "paginate".to_string()
        }
    );
    assert_eq!(
        parse_tag("show_pages 5").unwrap_err(),
        TagSyntaxError::TakesNoArguments {
            tag: "show_pages".to_string()
        }
    );
    assert_eq!(
        parse_tag("show_pageitems entries").unwrap_err(),
        TagSyntaxError::TakesNoArguments {
            tag: "show_pageitems".to_string()
        }
    );
    assert_eq!(
        parse_tag("lazy_paginate entries").unwrap_err(),
        TagSyntaxError::UnknownTag {
            tag: "lazy_paginate".to_string()
        }
    );
}

#[test]
fn test_syntax_error_messages() {
    let err = parse_tag("paginate entries.all").unwrap_err();
    assert_eq!(
        err.to_string(),
        "`paginate` tag requires a variable name `as` argument if the collection is provided \
         as a nested context variable (entries.all); e.g. `paginate entries.all as objects`"
    );
    assert_eq!(
        parse_tag("show_pages x").unwrap_err().to_string(),
        "`show_pages` tag takes no arguments"
    );
}

// =========================================================================
// PAGINATE
// =========================================================================

#[test]
fn test_paginate_defaults() {
    let settings = plain_settings();
    let request = Request::new("/");
    let mut ctx = TemplateContext::new(&request).with_settings(&settings);
    ctx.insert_collection("entries", entries(25));

    assert_eq!(paginate("paginate entries", &mut ctx).unwrap(), "");
    assert_eq!(ctx.collection("entries").unwrap(), &entries(10)[..]);

    let data = ctx.pagination().unwrap();
    assert_eq!(data.default_number, 1);
    assert_eq!(data.querystring_key, "page");
    assert_eq!(data.override_path, None);
    assert_eq!(data.page.number, 1);
    assert_eq!(data.page.num_pages, 3);
}

#[test]
fn test_paginate_reads_the_request() {
    let settings = plain_settings();
    let request = Request::new("/?page=3");
    let mut ctx = TemplateContext::new(&request).with_settings(&settings);
    ctx.insert_collection("entries", entries(25));

    paginate("paginate entries as page_entries", &mut ctx).unwrap();
    assert_eq!(ctx.collection("page_entries").unwrap(), &[21, 22, 23, 24, 25]);
    // The source collection is untouched when stored under another name
    assert_eq!(ctx.collection("entries").unwrap().len(), 25);
}

#[test]
fn test_paginate_with_custom_key_and_variables() {
    let settings = plain_settings();
    let request = Request::new("/?p=2&page=5");
    let mut ctx = TemplateContext::new(&request).with_settings(&settings);
    ctx.insert_collection("entries", entries(30));
    ctx.insert_var("size", "4");
    ctx.insert_var("key", "p");

    paginate("paginate size entries using key", &mut ctx).unwrap();
    assert_eq!(ctx.collection("entries").unwrap(), &[5, 6, 7, 8]);
    assert_eq!(ctx.pagination().unwrap().querystring_key, "p");
}

#[test]
fn test_paginate_first_page_size() {
    let settings = plain_settings();
    let request = Request::new("/?page=2");
    let mut ctx = TemplateContext::new(&request).with_settings(&settings);
    ctx.insert_collection("entries", entries(20));

    paginate("paginate 3,5 entries", &mut ctx).unwrap();
    assert_eq!(ctx.collection("entries").unwrap(), &[4, 5, 6, 7, 8]);
    assert_eq!(ctx.pagination().unwrap().page.num_pages, 5);
}

#[test]
fn test_paginate_negative_default_page() {
    let settings = plain_settings();
    let request = Request::new("/");
    let mut ctx = TemplateContext::new(&request).with_settings(&settings);
    ctx.insert_collection("entries", entries(25));

    paginate("paginate entries starting from page -1", &mut ctx).unwrap();
    assert_eq!(ctx.collection("entries").unwrap(), &[21, 22, 23, 24, 25]);
    assert_eq!(ctx.pagination().unwrap().default_number, 3);
}

#[test]
fn test_paginate_out_of_range_falls_back_to_first_page() {
    let settings = plain_settings();
    for query in ["/?page=99", "/?page=0", "/?page=-3"] {
        let request = Request::new(query);
        let mut ctx = TemplateContext::new(&request).with_settings(&settings);
        ctx.insert_collection("entries", entries(25));

        paginate("paginate entries", &mut ctx).unwrap();
        assert_eq!(ctx.pagination().unwrap().page.number, 1, "{query}");
    }
}

#[test]
fn test_paginate_garbage_page_uses_default() {
    let settings = plain_settings();
    let request = Request::new("/?page=abc");
    let mut ctx = TemplateContext::new(&request).with_settings(&settings);
    ctx.insert_collection("entries", entries(25));

    paginate("paginate entries starting from page 2", &mut ctx).unwrap();
    assert_eq!(ctx.pagination().unwrap().page.number, 2);
}

#[test]
fn test_paginate_oversized_page_falls_back_to_first_page() {
    let settings = plain_settings();
    for query in ["/?page=99999999999999999999", "/?page=-99999999999999999999"] {
        let request = Request::new(query);
        let mut ctx = TemplateContext::new(&request).with_settings(&settings);
        ctx.insert_collection("entries", entries(25));

        paginate("paginate entries starting from page 2", &mut ctx).unwrap();
        assert_eq!(ctx.pagination().unwrap().page.number, 1, "{query}");
    }
}

#[test]
fn test_paginate_render_errors() {
    let settings = plain_settings();
    let request = Request::new("/");
    let mut ctx: TemplateContext<'_, u32> = TemplateContext::new(&request).with_settings(&settings);

    assert_eq!(
        paginate("paginate entries", &mut ctx).unwrap_err(),
        RenderError::MissingVariable {
            name: "entries".to_string()
        }
    );

    ctx.insert_collection("entries", entries(5));
    assert_eq!(
        paginate("paginate size entries", &mut ctx).unwrap_err(),
        RenderError::MissingVariable {
            name: "size".to_string()
        }
    );

    ctx.insert_var("size", "ten");
    assert_eq!(
        paginate("paginate size entries", &mut ctx).unwrap_err(),
        RenderError::InvalidInteger {
            name: "size".to_string(),
            value: "ten".to_string()
        }
    );

    assert_eq!(
        paginate("paginate 0 entries", &mut ctx).unwrap_err(),
        RenderError::Page(crate::paginator::PageError::ZeroPerPage)
    );
}

// =========================================================================
// SHOW_PAGES / SHOW_PAGEITEMS
// =========================================================================

#[test]
fn test_show_tags_require_paginate() {
    let request = Request::new("/");
    let mut ctx: TemplateContext<'_, u32> = TemplateContext::new(&request);

    assert_eq!(
        parse_tag("show_pages").unwrap().render(&mut ctx).unwrap_err(),
        RenderError::MissingPaginationData
    );
    assert_eq!(
        parse_tag("show_pageitems").unwrap().render(&mut ctx).unwrap_err(),
        RenderError::MissingPaginationData
    );
}

#[test]
fn test_show_pages_after_paginate() {
    let settings = plain_settings();
    let request = Request::new("/news/?page=2");
    let mut ctx = TemplateContext::new(&request).with_settings(&settings);
    ctx.insert_collection("entries", entries(30));

    paginate("paginate entries", &mut ctx).unwrap();
    let html = parse_tag("show_pages").unwrap().render(&mut ctx).unwrap();

    insta::assert_snapshot!(
        html,
        @r#"<ul class="pagination"><li><a href="/news/">First</a></li><li><a href="/news/">Prev</a></li><li><a href="/news/">1</a></li><li class="active"><a href="/news/?page=2">2</a></li><li><a href="/news/?page=3">3</a></li><li><a href="/news/?page=3">Next</a></li><li><a href="/news/?page=3">Last</a></li></ul>"#
    );
}

#[test]
fn test_show_pages_uses_override_path_and_default_number() {
    let settings = plain_settings();
    let request = Request::new("/ignored/");
    let mut ctx = TemplateContext::new(&request).with_settings(&settings);
    ctx.insert_collection("entries", entries(30));

    paginate("paginate entries starting from page 3 with '/api/'", &mut ctx).unwrap();
    let pages = parse_tag("show_pages").unwrap().render(&mut ctx).unwrap();

    assert!(pages.contains(r#"<li class="active"><a href="/api/">3</a></li>"#));
    assert!(pages.contains(r#"<a href="/api/?page=1">1</a>"#));
    assert!(!pages.contains("/ignored/"));
}

#[test]
fn test_show_pageitems_after_paginate() {
    let settings = plain_settings();
    let request = Request::new("/?page=2");
    let mut ctx = TemplateContext::new(&request).with_settings(&settings);
    ctx.insert_collection("entries", entries(15));

    paginate("paginate entries", &mut ctx).unwrap();
    assert_eq!(
        parse_tag("show_pageitems").unwrap().render(&mut ctx).unwrap(),
        "Showing 11 to 15 of 15 items"
    );
}
