use crate::args::OutputFormat;
use crate::context::AppContext;
use crate::presentation::presenters::present_code_list;
use crate::presentation::renderers::console::render_code_list;
use anyhow::Result;

pub async fn handle(
    ctx: &AppContext,
    page: u32,
    page_size: Option<u32>,
    format: OutputFormat,
) -> Result<()> {
    let envelope = match page_size {
        Some(size) => ctx.ops.list_with(page, size).await?,
        None => ctx.ops.list(page).await?,
    };

    let vm = present_code_list(&envelope);
    render_code_list(&vm, format)
}
