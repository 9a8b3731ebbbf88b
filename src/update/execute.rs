//! Update execution - effectful operations
//!
//! Takes the payload produced by the pure planning functions and performs
//! the single pull request update via the platform API.

use crate::error::Result;
use crate::platform::PlatformService;
use crate::types::{PullRequestFields, UpdatePayload};
use tracing::debug;

/// Execute the update (EFFECTFUL)
///
/// Performs exactly one update call. Callers must not pass an empty
/// payload; [`build_payload`] already withholds those.
///
/// [`build_payload`]: crate::update::build_payload
pub async fn execute_update(
    platform: &dyn PlatformService,
    pr_number: u64,
    payload: &UpdatePayload,
) -> Result<PullRequestFields> {
    debug!(
        pr_number,
        has_title = payload.title.is_some(),
        has_body = payload.body.is_some(),
        "updating pull request"
    );

    let updated = platform.update_pull_request(pr_number, payload).await?;

    debug!(pr_number, "updated pull request");
    Ok(updated)
}
