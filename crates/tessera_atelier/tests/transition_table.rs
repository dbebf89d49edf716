//! Transition table tests.
//!
//! Each suite lists descriptions with their expected markup. Every entry is
//! appended on its own, then every ordered pair is updated `a -> b` and back
//! `a -> b -> a`; the container must always read as the last description.

use tessera_atelier::VirtualDom;
use tessera_gesso::MemoryHost;
use tessera_relief::{Description, Host};

struct Case {
    name: String,
    node: String,
    html: String,
}

fn case(name: &str, node: &str, html: &str) -> Case {
    Case {
        name: name.into(),
        node: node.into(),
        html: html.into(),
    }
}

fn describe(json: &str) -> Description {
    serde_json::from_str(json).unwrap_or_else(|err| panic!("invalid description {json}: {err}"))
}

fn check_suite(suite: &str, cases: &[Case]) {
    for case in cases {
        let mut host = MemoryHost::new();
        let root = host.create_element("i");
        let mut dom = VirtualDom::new(host);
        dom.append(&root, describe(&case.node), None).unwrap();
        assert_eq!(
            dom.host().inner_html(root),
            case.html,
            "[append] {suite}: {}",
            case.name
        );
    }

    for from in cases {
        for to in cases {
            let mut host = MemoryHost::new();
            let root = host.create_element("i");
            let mut dom = VirtualDom::new(host);

            let tree = dom.append(&root, describe(&from.node), None).unwrap();
            let tree = dom.update(tree, describe(&to.node)).unwrap();
            assert_eq!(
                dom.host().inner_html(root),
                to.html,
                "[update] {suite}: {} -> {}",
                from.name,
                to.name
            );

            let tree = dom.update(tree, describe(&from.node)).unwrap();
            assert_eq!(
                dom.host().inner_html(root),
                from.html,
                "[update] {suite}: {} -> {} -> {}",
                from.name,
                to.name,
                from.name
            );

            dom.remove(tree).unwrap();
            assert_eq!(dom.host().inner_html(root), "");
        }
    }
}

/// A `ul` of keyed `li` items reading `t{key}`.
fn keyed_list(keys: &[u32]) -> Case {
    let name = keys
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join("-");
    let items: Vec<String> = keys
        .iter()
        .map(|key| format!(r#"{{"tag": "li", "key": {key}, "children": ["t{key}"]}}"#))
        .collect();
    let html: String = keys.iter().map(|key| format!("<li>t{key}</li>")).collect();
    Case {
        name,
        node: format!(r#"{{"tag": "ul", "children": [{}]}}"#, items.join(", ")),
        html: format!("<ul>{html}</ul>"),
    }
}

/// A `ul` of keyed fragments, each holding two `li` items.
fn keyed_fragments(keys: &[u32]) -> Case {
    let name = keys
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join("-");
    let fragments: Vec<String> = keys
        .iter()
        .map(|key| {
            format!(
                r#"{{"key": {key}, "children": [{{"tag": "li", "children": "t{key}.0"}}, {{"tag": "li", "children": "t{key}.1"}}]}}"#
            )
        })
        .collect();
    let html: String = keys
        .iter()
        .map(|key| format!("<li>t{key}.0</li><li>t{key}.1</li>"))
        .collect();
    Case {
        name,
        node: format!(r#"{{"tag": "ul", "children": [{}]}}"#, fragments.join(", ")),
        html: format!("<ul>{html}</ul>"),
    }
}

// =============================================================================
// Attribute Suites
// =============================================================================

mod attributes {
    use super::*;

    #[test]
    fn attrs_div() {
        check_suite(
            "attrs div",
            &[
                case("none", r#"{"tag": "div"}"#, "<div></div>"),
                case("null", r#"{"tag": "div", "attrs": null}"#, "<div></div>"),
                case("empty", r#"{"tag": "div", "attrs": {}}"#, "<div></div>"),
                case(
                    "id 1",
                    r#"{"tag": "div", "attrs": {"id": "id1"}}"#,
                    r#"<div id="id1"></div>"#,
                ),
                case(
                    "id 2",
                    r#"{"tag": "div", "attrs": {"id": "id2"}}"#,
                    r#"<div id="id2"></div>"#,
                ),
                case(
                    "id and class",
                    r#"{"tag": "div", "attrs": {"id": "id1", "class": "class1"}}"#,
                    r#"<div id="id1" class="class1"></div>"#,
                ),
                case(
                    "title",
                    r#"{"tag": "div", "attrs": {"title": "title1"}}"#,
                    r#"<div title="title1"></div>"#,
                ),
                case(
                    "data-attr",
                    r#"{"tag": "div", "attrs": {"data-attr": "attr1"}}"#,
                    r#"<div data-attr="attr1"></div>"#,
                ),
            ],
        );
    }

    #[test]
    fn attrs_input() {
        check_suite(
            "attrs input",
            &[
                case("empty", r#"{"tag": "input"}"#, "<input>"),
                case(
                    "required false",
                    r#"{"tag": "input", "attrs": {"required": false}}"#,
                    "<input>",
                ),
                case(
                    "required true",
                    r#"{"tag": "input", "attrs": {"required": true}}"#,
                    r#"<input required="">"#,
                ),
            ],
        );
    }

    #[test]
    fn escaping() {
        check_suite(
            "escaping",
            &[
                case(
                    "attr",
                    r#"{"tag": "div", "attrs": {"title": "\"&"}}"#,
                    r#"<div title="&quot;&amp;"></div>"#,
                ),
                case(
                    "content",
                    r#"{"tag": "div", "children": "<&>"}"#,
                    "<div>&lt;&amp;&gt;</div>",
                ),
            ],
        );
    }

    #[test]
    fn style() {
        check_suite(
            "style",
            &[
                case("none", r#"{"tag": "div"}"#, "<div></div>"),
                case("null", r#"{"tag": "div", "attrs": {"style": null}}"#, "<div></div>"),
                case("string empty", r#"{"tag": "div", "attrs": {"style": ""}}"#, "<div></div>"),
                case(
                    "string color",
                    r#"{"tag": "div", "attrs": {"style": "color: red;"}}"#,
                    r#"<div style="color: red;"></div>"#,
                ),
                case(
                    "string color and display",
                    r#"{"tag": "div", "attrs": {"style": "color: red; display: inline;"}}"#,
                    r#"<div style="color: red; display: inline;"></div>"#,
                ),
                case("object empty", r#"{"tag": "div", "attrs": {"style": {}}}"#, "<div></div>"),
                case(
                    "object color",
                    r#"{"tag": "div", "attrs": {"style": {"color": "red"}}}"#,
                    r#"<div style="color: red;"></div>"#,
                ),
                case(
                    "object color and display",
                    r#"{"tag": "div", "attrs": {"style": {"color": "red", "display": "inline"}}}"#,
                    r#"<div style="color: red; display: inline;"></div>"#,
                ),
                case(
                    "object color important",
                    r#"{"tag": "div", "attrs": {"style": {"color": "red !important"}}}"#,
                    r#"<div style="color: red !important;"></div>"#,
                ),
            ],
        );
    }
}

// =============================================================================
// Content Suites
// =============================================================================

mod content {
    use super::*;

    #[test]
    fn general() {
        check_suite(
            "general",
            &[
                case("children none", r#"{"tag": "div"}"#, "<div></div>"),
                case("children empty", r#"{"tag": "div", "children": []}"#, "<div></div>"),
                case("text", r#"{"tag": "div", "children": "text"}"#, "<div>text</div>"),
                case("text array", r#"{"tag": "div", "children": ["text"]}"#, "<div>text</div>"),
                case(
                    "two ul",
                    r#"{"tag": "div", "children": [
                        {"tag": "ul", "children": [{"tag": "li", "children": ["t0"]}]},
                        {"tag": "ul", "children": [{"tag": "li", "children": ["t1"]}, {"tag": "li", "children": ["t2"]}]}
                    ]}"#,
                    "<div><ul><li>t0</li></ul><ul><li>t1</li><li>t2</li></ul></div>",
                ),
                case(
                    "two ul reversed",
                    r#"{"tag": "div", "children": [
                        {"tag": "ul", "children": [{"tag": "li", "children": ["t1"]}, {"tag": "li", "children": ["t2"]}]},
                        {"tag": "ul", "children": [{"tag": "li", "children": ["t0"]}]}
                    ]}"#,
                    "<div><ul><li>t1</li><li>t2</li></ul><ul><li>t0</li></ul></div>",
                ),
            ],
        );
    }

    #[test]
    fn text() {
        check_suite(
            "text",
            &[
                case("text empty", r#"{"tag": "div", "children": ""}"#, "<div></div>"),
                case("text empty array", r#"{"tag": "div", "children": [""]}"#, "<div></div>"),
                case("two texts empty", r#"{"tag": "div", "children": ["", ""]}"#, "<div></div>"),
                case(
                    "text object empty",
                    r##"{"tag": "div", "children": {"tag": "#", "children": ""}}"##,
                    "<div></div>",
                ),
                case(
                    "text object empty array",
                    r##"{"tag": "div", "children": [{"tag": "#", "children": ""}]}"##,
                    "<div></div>",
                ),
                case("text", r#"{"tag": "div", "children": "text"}"#, "<div>text</div>"),
                case(
                    "text object",
                    r##"{"tag": "div", "children": {"tag": "#", "children": "text"}}"##,
                    "<div>text</div>",
                ),
                case(
                    "element b + text empty",
                    r#"{"tag": "div", "children": [{"tag": "b", "children": "t0"}, ""]}"#,
                    "<div><b>t0</b></div>",
                ),
                case(
                    "element b + text",
                    r#"{"tag": "div", "children": [{"tag": "b", "children": "t0"}, "t1"]}"#,
                    "<div><b>t0</b>t1</div>",
                ),
                case(
                    "text empty + element b",
                    r#"{"tag": "div", "children": ["", {"tag": "b", "children": "t1"}]}"#,
                    "<div><b>t1</b></div>",
                ),
                case(
                    "text + element b",
                    r#"{"tag": "div", "children": ["t0", {"tag": "b", "children": "t1"}]}"#,
                    "<div>t0<b>t1</b></div>",
                ),
                case("text 0 + text 1", r#"{"tag": "div", "children": ["t0", "t1"]}"#, "<div>t0t1</div>"),
                case("text 1 + text 0", r#"{"tag": "div", "children": ["t1", "t0"]}"#, "<div>t1t0</div>"),
            ],
        );
    }

    #[test]
    fn comments() {
        check_suite(
            "comments",
            &[
                case(
                    "comment 1",
                    r#"{"tag": "div", "children": {"tag": "!", "children": "comment 1"}}"#,
                    "<div><!--comment 1--></div>",
                ),
                case(
                    "comment 2",
                    r#"{"tag": "div", "children": {"tag": "!", "children": "comment 2"}}"#,
                    "<div><!--comment 2--></div>",
                ),
            ],
        );
    }

    #[test]
    fn raw_markup() {
        check_suite(
            "html",
            &[
                case(
                    "html empty",
                    r#"{"tag": "div", "children": {"tag": "<", "children": ""}}"#,
                    "<div></div>",
                ),
                case(
                    "html empty array",
                    r#"{"tag": "div", "children": [{"tag": "<", "children": ""}]}"#,
                    "<div></div>",
                ),
                case(
                    "two html empty",
                    r#"{"tag": "div", "children": [{"tag": "<", "children": ""}, {"tag": "<", "children": ""}]}"#,
                    "<div></div>",
                ),
                case(
                    "html b",
                    r#"{"tag": "div", "children": {"tag": "<", "children": "<b>t0</b>"}}"#,
                    "<div><b>t0</b></div>",
                ),
                case(
                    "two html b",
                    r#"{"tag": "div", "children": {"tag": "<", "children": "<b>t0</b><b>t1</b>"}}"#,
                    "<div><b>t0</b><b>t1</b></div>",
                ),
                case(
                    "element b + html empty",
                    r#"{"tag": "div", "children": [{"tag": "b", "children": "t0"}, {"tag": "<", "children": ""}]}"#,
                    "<div><b>t0</b></div>",
                ),
                case(
                    "element b + html b",
                    r#"{"tag": "div", "children": [{"tag": "b", "children": "t0"}, {"tag": "<", "children": "<b>t1</b>"}]}"#,
                    "<div><b>t0</b><b>t1</b></div>",
                ),
                case(
                    "html empty + element b",
                    r#"{"tag": "div", "children": [{"tag": "<", "children": ""}, {"tag": "b", "children": "t1"}]}"#,
                    "<div><b>t1</b></div>",
                ),
                case(
                    "html b + element b",
                    r#"{"tag": "div", "children": [{"tag": "<", "children": "<b>t0</b>"}, {"tag": "b", "children": "t1"}]}"#,
                    "<div><b>t0</b><b>t1</b></div>",
                ),
                case(
                    "text + html text",
                    r#"{"tag": "div", "children": ["t0", {"tag": "<", "children": "ht1"}]}"#,
                    "<div>t0ht1</div>",
                ),
                case(
                    "text + html b",
                    r#"{"tag": "div", "children": ["t0", {"tag": "<", "children": "<b>t1</b>"}]}"#,
                    "<div>t0<b>t1</b></div>",
                ),
                case(
                    "text + (html text + b)",
                    r#"{"tag": "div", "children": ["t0", {"tag": "<", "children": "ht1<b>t2</b>"}]}"#,
                    "<div>t0ht1<b>t2</b></div>",
                ),
                case(
                    "text + (html b + text)",
                    r#"{"tag": "div", "children": ["t0", {"tag": "<", "children": "<b>t1</b>ht2"}]}"#,
                    "<div>t0<b>t1</b>ht2</div>",
                ),
            ],
        );
    }
}

// =============================================================================
// List Suites
// =============================================================================

mod lists {
    use super::*;

    #[test]
    fn unkeyed() {
        check_suite(
            "lists",
            &[
                case("empty", r#"{"tag": "ul", "children": []}"#, "<ul></ul>"),
                case(
                    "2 li",
                    r#"{"tag": "ul", "children": [{"tag": "li", "children": ["t0"]}, {"tag": "li", "children": ["t", "1"]}]}"#,
                    "<ul><li>t0</li><li>t1</li></ul>",
                ),
                case(
                    "3 li",
                    r#"{"tag": "ul", "children": [
                        {"tag": "li", "children": ["t", "0"]},
                        {"tag": "li", "children": ["t1"]},
                        {"tag": "li", "children": ["t2"]}
                    ]}"#,
                    "<ul><li>t0</li><li>t1</li><li>t2</li></ul>",
                ),
                case(
                    "5 li",
                    r#"{"tag": "ul", "children": [
                        {"tag": "li", "children": ["t0"]},
                        {"tag": "li", "children": ["t1"]},
                        {"tag": "li", "children": ["t2"]},
                        {"tag": "li", "children": ["t", "3"]},
                        {"tag": "li", "children": ["t", "4"]}
                    ]}"#,
                    "<ul><li>t0</li><li>t1</li><li>t2</li><li>t3</li><li>t4</li></ul>",
                ),
            ],
        );
    }

    #[test]
    fn keyed() {
        let cases: Vec<Case> = [
            &[0][..],
            &[1],
            &[2],
            &[9],
            &[0, 1, 2],
            &[1, 0, 2],
            &[0, 2, 1],
            &[1, 2],
            &[0, 1],
            &[0, 1, 2, 3, 4],
            &[4, 3, 2, 1, 0],
            &[2, 1, 4, 0, 3],
            &[4, 1, 2],
            &[0, 4],
            &[0, 5, 4],
            &[0, 6, 5, 4],
        ]
        .into_iter()
        .map(keyed_list)
        .collect();
        check_suite("keyed lists", &cases);
    }

    #[test]
    fn keyed_markup() {
        check_suite(
            "keyed html",
            &[
                case(
                    "0",
                    r#"{"tag": "div", "children": [{"tag": "<", "key": 0, "children": "<b>t0.0</b><b>t0.1</b>"}]}"#,
                    "<div><b>t0.0</b><b>t0.1</b></div>",
                ),
                case(
                    "1",
                    r#"{"tag": "div", "children": [{"tag": "<", "key": 1, "children": "<b>t1.0</b><b>t1.1</b>"}]}"#,
                    "<div><b>t1.0</b><b>t1.1</b></div>",
                ),
                case(
                    "0-1",
                    r#"{"tag": "div", "children": [
                        {"tag": "<", "key": 0, "children": "<b>t0.0</b><b>t0.1</b>"},
                        {"tag": "<", "key": 1, "children": "<b>t1.0</b><b>t1.1</b>"}
                    ]}"#,
                    "<div><b>t0.0</b><b>t0.1</b><b>t1.0</b><b>t1.1</b></div>",
                ),
                case(
                    "1-0",
                    r#"{"tag": "div", "children": [
                        {"tag": "<", "key": 1, "children": "<b>t1.0</b><b>t1.1</b>"},
                        {"tag": "<", "key": 0, "children": "<b>t0.0</b><b>t0.1</b>"}
                    ]}"#,
                    "<div><b>t1.0</b><b>t1.1</b><b>t0.0</b><b>t0.1</b></div>",
                ),
            ],
        );
    }
}

// =============================================================================
// Fragment Suites
// =============================================================================

mod fragments {
    use super::*;

    #[test]
    fn simple() {
        check_suite(
            "simple fragments",
            &[
                case("without children", r#"{"tag": "div", "children": {}}"#, "<div></div>"),
                case("two without children", r#"{"tag": "div", "children": [{}, {}]}"#, "<div></div>"),
                case(
                    "empty children array",
                    r#"{"tag": "div", "children": {"children": []}}"#,
                    "<div></div>",
                ),
                case(
                    "null children",
                    r#"{"tag": "div", "children": {"children": null}}"#,
                    "<div></div>",
                ),
                case(
                    "text children array",
                    r#"{"tag": "div", "children": {"children": ["text"]}}"#,
                    "<div>text</div>",
                ),
                case(
                    "text child",
                    r#"{"tag": "div", "children": {"children": "text"}}"#,
                    "<div>text</div>",
                ),
            ],
        );
    }

    #[test]
    fn surrounded() {
        check_suite(
            "surrounded fragments",
            &[
                case(
                    "div + empty fragment",
                    r#"{"tag": "div", "children": [{"tag": "div", "children": "t0"}, {"children": []}]}"#,
                    "<div><div>t0</div></div>",
                ),
                case(
                    "div + fragment with 2 div",
                    r#"{"tag": "div", "children": [
                        {"tag": "div", "children": "t0"},
                        {"children": [{"tag": "div", "children": "t1"}, {"tag": "div", "children": "t2"}]}
                    ]}"#,
                    "<div><div>t0</div><div>t1</div><div>t2</div></div>",
                ),
                case(
                    "fragment with 2 div + div",
                    r#"{"tag": "div", "children": [
                        {"children": [{"tag": "div", "children": "t1"}, {"tag": "div", "children": "t2"}]},
                        {"tag": "div", "children": "t3"}
                    ]}"#,
                    "<div><div>t1</div><div>t2</div><div>t3</div></div>",
                ),
                case(
                    "fragment with 2 div",
                    r#"{"tag": "div", "children": [
                        {"children": [{"tag": "div", "children": "t1"}, {"tag": "div", "children": "t2"}]}
                    ]}"#,
                    "<div><div>t1</div><div>t2</div></div>",
                ),
                case(
                    "div + fragment with 3 div",
                    r#"{"tag": "div", "children": [
                        {"tag": "div", "children": "t0"},
                        {"children": [
                            {"tag": "div", "children": "t1"},
                            {"tag": "div", "children": "t2"},
                            {"tag": "div", "children": "t3"}
                        ]}
                    ]}"#,
                    "<div><div>t0</div><div>t1</div><div>t2</div><div>t3</div></div>",
                ),
                case(
                    "div + fragment with 2 div + div",
                    r#"{"tag": "div", "children": [
                        {"tag": "div", "children": "t0"},
                        {"children": [{"tag": "div", "children": "t1"}, {"tag": "div", "children": "t2"}]},
                        {"tag": "div", "children": "t3"}
                    ]}"#,
                    "<div><div>t0</div><div>t1</div><div>t2</div><div>t3</div></div>",
                ),
                case(
                    "div + empty fragment + div",
                    r#"{"tag": "div", "children": [
                        {"tag": "div", "children": "t0"},
                        {"children": []},
                        {"tag": "div", "children": "t3"}
                    ]}"#,
                    "<div><div>t0</div><div>t3</div></div>",
                ),
                case(
                    "div + fragment with text + div",
                    r#"{"tag": "div", "children": [
                        {"tag": "div", "children": "t0"},
                        {"children": "t1"},
                        {"tag": "div", "children": "t3"}
                    ]}"#,
                    "<div><div>t0</div>t1<div>t3</div></div>",
                ),
                case(
                    "div + fragment with html + div",
                    r#"{"tag": "div", "children": [
                        {"tag": "div", "children": "t0"},
                        {"children": {"tag": "<", "children": "<b>t1</b>"}},
                        {"tag": "div", "children": "t3"}
                    ]}"#,
                    "<div><div>t0</div><b>t1</b><div>t3</div></div>",
                ),
            ],
        );
    }

    #[test]
    fn keyed() {
        let cases: Vec<Case> = [
            &[0][..],
            &[0, 1],
            &[1, 0],
            &[1],
            &[0, 1, 2],
            &[2, 1, 0],
            &[0, 2],
            &[2, 0],
        ]
        .into_iter()
        .map(keyed_fragments)
        .collect();
        check_suite("keyed fragments", &cases);
    }

    #[test]
    fn nested() {
        check_suite(
            "nested fragments",
            &[
                case(
                    "fragment > text",
                    r#"{"tag": "div", "children": {"children": "t0"}}"#,
                    "<div>t0</div>",
                ),
                case(
                    "fragment > div",
                    r#"{"tag": "div", "children": {"children": {"tag": "div", "children": "t0"}}}"#,
                    "<div><div>t0</div></div>",
                ),
                case(
                    "fragment > fragment > text",
                    r#"{"tag": "div", "children": {"children": {"children": "t00"}}}"#,
                    "<div>t00</div>",
                ),
                case(
                    "fragment > fragment > text + text",
                    r#"{"tag": "div", "children": {"children": {"children": ["t00", "t01"]}}}"#,
                    "<div>t00t01</div>",
                ),
                case(
                    "fragment > fragment > html",
                    r#"{"tag": "div", "children": {"children": {"children": {"tag": "<", "children": "<b>t00</b>"}}}}"#,
                    "<div><b>t00</b></div>",
                ),
                case(
                    "fragment > fragment > div",
                    r#"{"tag": "div", "children": {"children": {"children": {"tag": "div", "children": "t00"}}}}"#,
                    "<div><div>t00</div></div>",
                ),
                case(
                    "fragment > fragment > div + div",
                    r#"{"tag": "div", "children": {"children": {"children": [
                        {"tag": "div", "children": "t00"},
                        {"tag": "div", "children": "t01"}
                    ]}}}"#,
                    "<div><div>t00</div><div>t01</div></div>",
                ),
            ],
        );
    }
}
