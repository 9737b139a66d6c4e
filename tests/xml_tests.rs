use android_layout_ids::xml::{Element, Node, XmlDocument};

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn parses_nested_elements_and_attributes() {
    let doc = XmlDocument::parse(
        r#"<LinearLayout android:orientation="vertical"><TextView android:text="Hi"/><Button/></LinearLayout>"#,
    )
    .unwrap();

    assert_eq!(doc.root.name, "LinearLayout");
    assert_eq!(doc.root.attribute("android:orientation").as_deref(), Some("vertical"));

    let children: Vec<&Element> = doc.root.child_elements().collect();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].name, "TextView");
    assert_eq!(children[0].attribute("android:text").as_deref(), Some("Hi"));
    assert_eq!(children[1].name, "Button");
    assert!(children[1].attributes.is_empty());
}

#[test]
fn tag_names_keep_prefix_and_case() {
    let doc = XmlDocument::parse("<a:Root><textview/><TextView/></a:Root>").unwrap();
    assert_eq!(doc.root.name, "a:Root");
    assert_eq!(doc.elements_named("TextView").len(), 1);
    assert_eq!(doc.elements_named("textview").len(), 1);
}

#[test]
fn declaration_is_captured() {
    let doc = XmlDocument::parse(r#"<?xml version="1.0" encoding="utf-8"?><a/>"#).unwrap();
    let decl = doc.declaration.expect("declaration");
    assert_eq!(decl.version, "1.0");
    assert_eq!(decl.encoding.as_deref(), Some("utf-8"));
    assert!(decl.standalone.is_none());
}

#[test]
fn leading_bom_is_ignored() {
    let doc = XmlDocument::parse("\u{feff}<a/>").unwrap();
    assert_eq!(doc.root.name, "a");
}

#[test]
fn comments_around_root_go_to_prolog_and_epilog() {
    let doc = XmlDocument::parse("<!-- head -->\n<a/>\n<!-- tail -->\n").unwrap();
    assert_eq!(doc.prolog, vec![Node::Comment(" head ".into())]);
    assert_eq!(doc.epilog, vec![Node::Comment(" tail ".into())]);
}

#[test]
fn entity_text_is_kept_as_written() {
    let doc = XmlDocument::parse("<a>x &amp; y</a>").unwrap();
    assert_eq!(doc.root.children, vec![Node::Text("x &amp; y".into())]);
}

#[test]
fn attribute_values_are_unescaped_on_read() {
    let doc = XmlDocument::parse(r#"<a title="Fish &amp; Chips"/>"#).unwrap();
    assert_eq!(doc.root.attribute("title").as_deref(), Some("Fish & Chips"));
    assert_eq!(doc.root.attributes[0].raw_value, "Fish &amp; Chips");
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn mismatched_end_tag_is_rejected() {
    assert!(XmlDocument::parse("<LinearLayout><TextView></LinearLayout>").is_err());
}

#[test]
fn unclosed_root_is_rejected() {
    assert!(XmlDocument::parse("<LinearLayout><TextView/>").is_err());
}

#[test]
fn empty_input_is_rejected() {
    let err = XmlDocument::parse("").unwrap_err();
    assert!(err.message.contains("no root"), "got: {}", err);
}

#[test]
fn two_roots_are_rejected() {
    let err = XmlDocument::parse("<a/><b/>").unwrap_err();
    assert!(err.message.contains("more than one root"), "got: {}", err);
}

#[test]
fn text_outside_root_is_rejected() {
    assert!(XmlDocument::parse("hello <a/>").is_err());
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn serialization_adds_default_declaration() {
    let doc = XmlDocument::parse("<a><b/></a>").unwrap();
    assert_eq!(
        doc.to_xml().unwrap(),
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<a><b/></a>\n"
    );
}

#[test]
fn childless_elements_are_written_self_closing() {
    let doc = XmlDocument::parse("<a></a>").unwrap();
    assert!(doc.to_xml().unwrap().ends_with("<a/>\n"));
}

#[test]
fn whitespace_inside_root_is_preserved() {
    let source = "<a>\n    <b x=\"1\"/>\n\n    <c/>\n</a>";
    let doc = XmlDocument::parse(source).unwrap();
    let xml = doc.to_xml().unwrap();
    assert!(xml.contains(source), "got: {}", xml);
}

#[test]
fn comments_cdata_and_instructions_survive() {
    let source = "<!-- top -->\n<a><!-- inner --><![CDATA[x < y]]><?tool keep?>1 &lt; 2</a>";
    let xml = XmlDocument::parse(source).unwrap().to_xml().unwrap();
    assert!(xml.contains("<!-- top -->\n<a>"));
    assert!(xml.contains("<!-- inner -->"));
    assert!(xml.contains("<![CDATA[x < y]]>"));
    assert!(xml.contains("<?tool keep?>"));
    assert!(xml.contains("1 &lt; 2"));
}

#[test]
fn set_attribute_escapes_and_appends() {
    let mut doc = XmlDocument::parse(r#"<a first="1"/>"#).unwrap();
    doc.root.set_attribute("second", "x<y");
    doc.root.set_attribute("first", "2");
    let xml = doc.to_xml().unwrap();
    assert!(xml.contains(r#"<a first="2" second="x&lt;y"/>"#), "got: {}", xml);
}

#[test]
fn serialization_is_stable_across_passes() {
    let source = r#"<!-- layout -->
<LinearLayout xmlns:android="http://schemas.android.com/apk/res/android">
    <TextView android:text="A &amp; B"/>
    <Button></Button>
</LinearLayout>"#;
    let once = XmlDocument::parse(source).unwrap().to_xml().unwrap();
    let twice = XmlDocument::parse(&once).unwrap().to_xml().unwrap();
    assert_eq!(once, twice);
}

// ============================================================================
// Round trips
// ============================================================================

/// Serialize `source` twice, asserting the second pass changes nothing.
/// Returns the reparsed first serialization.
fn reparsed(source: &str) -> XmlDocument {
    let once = XmlDocument::parse(source).unwrap().to_xml().unwrap();
    let reparsed = XmlDocument::parse(&once)
        .unwrap_or_else(|e| panic!("output is not well-formed: {}\n{}", e, once));
    assert_eq!(reparsed.to_xml().unwrap(), once);
    reparsed
}

fn text_attribute(doc: &XmlDocument) -> String {
    doc.elements_named("TextView")[0]
        .attribute("android:text")
        .expect("android:text")
        .into_owned()
}

#[test]
fn single_quoted_attribute_keeps_its_value() {
    let doc = reparsed(r#"<LinearLayout><TextView android:text='plain'/></LinearLayout>"#);
    assert_eq!(text_attribute(&doc), "plain");
}

#[test]
fn single_quoted_attribute_with_double_quotes_stays_well_formed() {
    let doc = reparsed(r#"<LinearLayout><TextView android:text='Say "hi"'/></LinearLayout>"#);
    assert_eq!(text_attribute(&doc), r#"Say "hi""#);
}

#[test]
fn apostrophe_in_double_quoted_attribute_survives() {
    let doc = reparsed(r#"<LinearLayout><TextView android:text="It's 'quoted'"/></LinearLayout>"#);
    assert_eq!(text_attribute(&doc), "It's 'quoted'");
}

#[test]
fn mixed_quotes_survive() {
    let doc = reparsed(
        r#"<LinearLayout><TextView android:text='It&apos;s "both"'/></LinearLayout>"#,
    );
    assert_eq!(text_attribute(&doc), r#"It's "both""#);
}

#[test]
fn doctype_with_internal_subset_survives() {
    let source = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE resources [<!ENTITY app "Demo">]>
<resources><string name="title">&app; rocks</string></resources>
"#;
    let doc = reparsed(source);

    match &doc.prolog[..] {
        [Node::DocType(d)] => assert!(d.contains(r#"<!ENTITY app "Demo">"#), "doctype: {}", d),
        other => panic!("Expected a DOCTYPE in the prolog, got {:?}", other),
    }
    let strings = doc.elements_named("string");
    assert_eq!(strings[0].children, vec![Node::Text("&app; rocks".into())]);
}
