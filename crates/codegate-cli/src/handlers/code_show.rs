use crate::args::OutputFormat;
use crate::context::AppContext;
use crate::presentation::presenters::present_code_detail;
use crate::presentation::renderers::console::render_code_detail;
use anyhow::Result;
use codegate_core::AccountWindow;

pub async fn handle(
    ctx: &AppContext,
    reference: &str,
    accounts_page: u32,
    format: OutputFormat,
) -> Result<()> {
    let code = ctx.ops.find(reference).await?;

    let window = AccountWindow {
        page: accounts_page.max(1),
        page_size: ctx.config.accounts_page_size,
    };

    let vm = present_code_detail(&code, &window);
    render_code_detail(&vm, format)
}
