//! A small platform-free markup tree.
//!
//! The page is described once as a tree of [`Node`]s; the web frontend turns
//! it into DOM elements and host tests query it directly.

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(ElementNode),
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ElementNode {
    pub tag: &'static str,
    pub namespace: Option<&'static str>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

#[inline]
pub fn el(tag: &'static str) -> ElementNode {
    ElementNode {
        tag,
        namespace: None,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

#[inline]
pub fn svg(tag: &'static str) -> ElementNode {
    ElementNode {
        namespace: Some(SVG_NS),
        ..el(tag)
    }
}

#[inline]
pub fn text(value: impl Into<String>) -> Node {
    Node::Text(value.into())
}

impl ElementNode {
    /// Set an attribute, replacing any previous value.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn id(self, value: impl Into<String>) -> Self {
        self.attr("id", value)
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn style(self, value: impl Into<String>) -> Self {
        self.attr("style", value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(text(value))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// This element and all element descendants, depth first.
    pub fn descendants(&self) -> Vec<&ElementNode> {
        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }

    pub fn find_all(&self, pred: impl Fn(&ElementNode) -> bool) -> Vec<&ElementNode> {
        self.descendants().into_iter().filter(|e| pred(e)).collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&ElementNode> {
        self.descendants()
            .into_iter()
            .find(|e| e.get("id") == Some(id))
    }

    /// Concatenated text of the subtree, like `Node.textContent`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        push_text(&self.children, &mut out);
        out
    }
}

fn collect<'a>(el: &'a ElementNode, out: &mut Vec<&'a ElementNode>) {
    out.push(el);
    for child in &el.children {
        if let Node::Element(c) = child {
            collect(c, out);
        }
    }
}

fn push_text(nodes: &[Node], out: &mut String) {
    for n in nodes {
        match n {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => push_text(&e.children, out),
        }
    }
}

impl From<ElementNode> for Node {
    fn from(e: ElementNode) -> Self {
        Node::Element(e)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}
