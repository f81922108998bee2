//! Model (note type) actions.

use std::collections::HashMap;

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::ModelInput;

/// Model operations.
///
/// Obtained via [`AnkiClient::models()`].
#[derive(Debug)]
pub struct ModelActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModelNameParams<'a> {
    model_name: &'a str,
}

impl ModelActions<'_> {
    /// Names of all models.
    pub async fn names(&self) -> Result<Vec<String>> {
        self.client.invoke_bare("modelNames").await
    }

    /// Map of model name to model ID.
    pub async fn names_and_ids(&self) -> Result<HashMap<String, i64>> {
        self.client.invoke_bare("modelNamesAndIds").await
    }

    /// Field names of `model`, in order.
    pub async fn field_names(&self, model: &str) -> Result<Vec<String>> {
        self.client
            .invoke("modelFieldNames", ModelNameParams { model_name: model })
            .await
    }

    /// Create a model.
    ///
    /// The model is checked with [`ModelInput::validate`] first and nothing
    /// is sent if it fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ankiconnect::{AnkiClient, ModelInput};
    ///
    /// # async fn example() -> ankiconnect::Result<()> {
    /// let client = AnkiClient::new()?;
    /// let model = ModelInput::new("Minimal")
    ///     .field("Front")
    ///     .field("Back")
    ///     .template("Card 1", "{{Front}}", "{{FrontSide}}<hr id=answer>{{Back}}");
    /// client.models().create(&model).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, model: &ModelInput) -> Result<()> {
        model.validate()?;
        self.client.invoke_unit("createModel", model).await
    }
}
