use crate::context::AppContext;
use anyhow::Result;
use codegate_types::CodeStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    Enable,
    Disable,
    Toggle,
}

/// Apply a status action and report the status the backend confirms.
///
/// The displayed status is re-fetched after the mutation rather than
/// assumed; a failed update therefore changes nothing visible.
pub async fn handle(ctx: &AppContext, reference: &str, action: StatusAction) -> Result<()> {
    let code = ctx.ops.find(reference).await?;

    let target = match action {
        StatusAction::Enable => CodeStatus::Enabled,
        StatusAction::Disable => CodeStatus::Disabled,
        StatusAction::Toggle => code.status.toggled(),
    };

    if code.status == target {
        println!("Activation code {} is already {}.", code.code, target);
        return Ok(());
    }

    ctx.ops.set_status(code.id, target).await?;

    // Confirming reload; only this read decides what we report.
    let confirmed = ctx.ops.find(&code.id.to_string()).await?;
    println!(
        "Activation code {} is now {}.",
        confirmed.code, confirmed.status
    );

    Ok(())
}
