//! Plain-text and JSON rendering of ViewModels for one-shot commands.
//!
//! JSON output is the ViewModel serialized verbatim; text output lays the
//! same data out for humans. Color is applied only when stdout is a
//! terminal.

use crate::args::OutputFormat;
use crate::presentation::view_models::{
    CodeDetailViewModel, CodeListViewModel, GeneratedCodeViewModel, SessionStatusViewModel,
};
use anyhow::Result;
use codegate_core::PageItem;
use codegate_types::CodeStatus;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

fn status_label(status: CodeStatus) -> String {
    if use_color() {
        match status {
            CodeStatus::Enabled => format!("{}", "enabled".green()),
            CodeStatus::Disabled => format!("{}", "disabled".red()),
        }
    } else {
        status.to_string()
    }
}

fn emit_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn render_code_list(vm: &CodeListViewModel, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return emit_json(vm);
    }

    if vm.rows.is_empty() {
        println!("No activation codes.");
        return Ok(());
    }

    println!(
        "{:<6} {:<20} {:<10} {:<12} {:<20} {:<20}",
        "ID", "CODE", "STATUS", "ACCOUNTS", "CREATED", "EXPIRES"
    );
    for row in &vm.rows {
        println!(
            "{:<6} {:<20} {:<10} {:<12} {:<20} {:<20}",
            row.id,
            row.code,
            status_label(row.status),
            format!("{}/{}", row.accounts_used, row.max_accounts),
            row.created_at.format("%Y-%m-%d %H:%M"),
            row.expires_at.format("%Y-%m-%d %H:%M"),
        );
    }

    if let Some((start, end)) = vm.item_range {
        println!();
        println!(
            "Showing {} to {} of {}   {}",
            start,
            end,
            vm.total,
            render_rail(&vm.rail.items, vm.rail.page)
        );
    }

    Ok(())
}

/// Render the compressed page rail as e.g. `1 … 4 [5] 6 … 10`.
pub fn render_rail(items: &[PageItem], current: u32) -> String {
    items
        .iter()
        .map(|item| match item {
            PageItem::Page(n) if *n == current => format!("[{}]", n),
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis(_) => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_code_detail(vm: &CodeDetailViewModel, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return emit_json(vm);
    }

    println!("Activation code {}", vm.code);
    println!("  id:       {}", vm.id);
    println!("  status:   {}", status_label(vm.status));
    println!("  created:  {}", vm.created_at.format("%Y-%m-%d %H:%M"));
    println!("  expires:  {}", vm.expires_at.format("%Y-%m-%d %H:%M"));
    println!("  accounts: {}/{}", vm.accounts_total, vm.max_accounts);

    if vm.accounts.is_empty() {
        println!();
        println!("No provisioned accounts.");
        return Ok(());
    }

    for account in &vm.accounts {
        println!();
        println!("  account #{}", account.id);
        for field in &account.fields {
            println!("    {:<16} {}", field.label, field.value);
        }
    }

    if !vm.controls_hidden {
        println!();
        println!(
            "Accounts page {} of {} (use --accounts-page to move)",
            vm.accounts_page, vm.accounts_total_pages
        );
    }

    Ok(())
}

pub fn render_generated(vm: &GeneratedCodeViewModel, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return emit_json(vm);
    }

    println!("Generated activation code {}", vm.code);
    println!("  id:           {}", vm.id);
    println!("  max accounts: {}", vm.max_accounts);
    println!("  expires:      {}", vm.expires_at.format("%Y-%m-%d %H:%M"));
    Ok(())
}

pub fn render_session_status(vm: &SessionStatusViewModel, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return emit_json(vm);
    }

    if vm.authenticated {
        println!("Authenticated (a session token is held).");
    } else {
        println!("Not authenticated. Run 'codegate auth login --username <name>'.");
    }
    Ok(())
}
