/// Builds a compact xml string one element at a time.
///
/// The builder does not check that elements are closed in the right order, that is up to the caller.
pub(crate) struct XmlBuilder {
    xml: String,
}

impl XmlBuilder {
    pub fn new() -> Self {
        Self {
            xml: r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#.to_string() + "\n",
        }
    }

    pub fn open(&mut self, tag: &str, attributes: &[(&str, &str)]) -> &mut Self {
        self.start_tag(tag, attributes);
        self.xml.push('>');
        self
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.xml.push_str("</");
        self.xml.push_str(tag);
        self.xml.push('>');
        self
    }

    pub fn empty(&mut self, tag: &str, attributes: &[(&str, &str)]) -> &mut Self {
        self.start_tag(tag, attributes);
        self.xml.push_str("/>");
        self
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.xml.push_str(&escape(text));
        self
    }

    pub fn element(&mut self, tag: &str, attributes: &[(&str, &str)], text: &str) -> &mut Self {
        self.open(tag, attributes).text(text).close(tag)
    }

    pub fn build(self) -> String {
        self.xml
    }

    fn start_tag(&mut self, tag: &str, attributes: &[(&str, &str)]) {
        self.xml.push('<');
        self.xml.push_str(tag);
        for (name, value) in attributes {
            self.xml.push(' ');
            self.xml.push_str(name);
            self.xml.push_str("=\"");
            self.xml.push_str(&escape(value));
            self.xml.push('"');
        }
    }
}

/// Escapes text for use in both element content and attribute values.
pub(crate) fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            // Control characters are not allowed in xml 1.0
            c if (c as u32) < 0x20 && !matches!(c, '\t' | '\n' | '\r') => {}
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn builds_nested_elements() {
        let mut builder = XmlBuilder::new();
        builder
            .open("w:p", &[])
            .empty("w:jc", &[("w:val", "center")])
            .element("w:t", &[("xml:space", "preserve")], "users")
            .close("w:p");

        assert_eq!(
            builder.build(),
            indoc! {r#"
            <?xml version="1.0" encoding="UTF-8" standalone="yes"?>
            <w:p><w:jc w:val="center"/><w:t xml:space="preserve">users</w:t></w:p>"#}
        );
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("a < b && c > 'd'"), "a &lt; b &amp;&amp; c &gt; &apos;d&apos;");
        assert_eq!(escape(r#"nextval('seq'::regclass)"#), "nextval(&apos;seq&apos;::regclass)");
        assert_eq!(escape("say \"hi\""), "say &quot;hi&quot;");
    }

    #[test]
    fn drops_control_characters() {
        assert_eq!(escape("a\u{1}b\tc"), "ab\tc");
    }

    #[test]
    fn escapes_attribute_values() {
        let mut builder = XmlBuilder::new();
        builder.empty("dc:title", &[("x", "a\"b")]);

        assert!(builder.build().ends_with(r#"<dc:title x="a&quot;b"/>"#));
    }
}
