//! Model (note type) types.

use serde::Serialize;

use crate::error::{Error, Result};

/// A new model to create.
///
/// # Example
///
/// ```
/// use ankiconnect::ModelInput;
///
/// let model = ModelInput::new("Vocab")
///     .field("Word")
///     .field("Meaning")
///     .template("Recognition", "{{Word}}", "{{FrontSide}}<hr id=answer>{{Meaning}}");
/// assert!(model.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInput {
    pub model_name: String,
    pub in_order_fields: Vec<String>,
    /// Empty means Anki's built-in styling.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub css: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cloze: Option<bool>,
    pub card_templates: Vec<CardTemplateInput>,
}

impl ModelInput {
    /// Start a model named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            model_name: name.into(),
            in_order_fields: Vec::new(),
            css: String::new(),
            is_cloze: None,
            card_templates: Vec::new(),
        }
    }

    /// Append a field.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.in_order_fields.push(name.into());
        self
    }

    /// Set the card CSS.
    pub fn css(mut self, css: impl Into<String>) -> Self {
        self.css = css.into();
        self
    }

    /// Mark the model as a cloze type.
    pub fn cloze(mut self, is_cloze: bool) -> Self {
        self.is_cloze = Some(is_cloze);
        self
    }

    /// Append a card template.
    pub fn template(
        mut self,
        name: impl Into<String>,
        front: impl Into<String>,
        back: impl Into<String>,
    ) -> Self {
        self.card_templates.push(CardTemplateInput {
            name: name.into(),
            front: front.into(),
            back: back.into(),
        });
        self
    }

    /// Reject models AnkiConnect would refuse or create broken.
    pub fn validate(&self) -> Result<()> {
        if self.model_name.trim().is_empty() {
            return Err(Error::Validation("model name is empty".into()));
        }
        if self.in_order_fields.is_empty() {
            return Err(Error::Validation(format!(
                "model {} has no fields",
                self.model_name
            )));
        }
        if self.card_templates.is_empty() {
            return Err(Error::Validation(format!(
                "model {} has no card templates",
                self.model_name
            )));
        }
        Ok(())
    }
}

/// A card template inside a [`ModelInput`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardTemplateInput {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Front")]
    pub front: String,
    #[serde(rename = "Back")]
    pub back: String,
}
