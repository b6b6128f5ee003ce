//! CLI command implementations.

pub(crate) mod announcement;
pub(crate) mod missions;
pub(crate) mod page;
pub(crate) mod paths;
pub(crate) mod photos;

pub(crate) use announcement::AnnouncementArgs;
pub(crate) use missions::MissionsCommand;
pub(crate) use page::PageArgs;
pub(crate) use paths::PathsArgs;
pub(crate) use photos::PhotosArgs;

use std::path::Path;

use sar_config::Config;
use sar_content::ContentClient;

use crate::error::CliError;
use crate::output::Output;

/// Load configuration and construct a content client.
///
/// Prints setup guidance when the `[store]` section is missing or invalid.
pub(crate) fn load_client(
    config_path: Option<&Path>,
    output: &Output,
) -> Result<(Config, ContentClient), CliError> {
    let config = Config::load(config_path)?;

    let store = match config.require_store() {
        Ok(store) => store,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            output.info("\nAdd the following to your sar.toml:");
            output.info("\n[store]");
            output.info(r#"space_id = "your-space-id""#);
            output.info(r#"delivery_token = "${SAR_DELIVERY_TOKEN}""#);
            output.info(r#"preview_token = "${SAR_PREVIEW_TOKEN}""#);
            return Err(CliError::Validation(
                "store configuration required".to_owned(),
            ));
        }
    };

    let client = ContentClient::from_config(store)?;
    Ok((config, client))
}
