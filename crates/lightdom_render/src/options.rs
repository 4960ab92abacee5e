use strum_macros::{Display, EnumString};

/// How an element's class list is written out
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ClassAttributeStyle {
    /// One `class="name"` attribute per class: `<p class="a" class="b">`
    #[default]
    Repeated,
    /// A single space-joined attribute: `<p class="a b">`.
    /// Omitted when the class list is empty.
    Merged,
}

#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    pub class_attributes: ClassAttributeStyle,
}

impl RenderOptions {
    pub fn with_class_attributes(class_attributes: ClassAttributeStyle) -> RenderOptions {
        RenderOptions { class_attributes }
    }
}
