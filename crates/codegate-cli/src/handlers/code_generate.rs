use crate::args::OutputFormat;
use crate::context::AppContext;
use crate::presentation::view_models::GeneratedCodeViewModel;
use crate::presentation::renderers::console::render_generated;
use anyhow::Result;
use codegate_types::CodeDuration;

pub async fn handle(
    ctx: &AppContext,
    duration_days: u32,
    max_accounts: u32,
    format: OutputFormat,
) -> Result<()> {
    // Both checks happen before any network call: the duration is a closed
    // set and the capacity is bounded in the ops layer.
    let duration = CodeDuration::try_from(duration_days)?;
    let code = ctx.ops.generate(duration, max_accounts).await?;

    let vm = GeneratedCodeViewModel {
        id: code.id,
        code: code.code,
        expires_at: code.expires_at,
        max_accounts: code.max_accounts,
    };
    render_generated(&vm, format)
}
