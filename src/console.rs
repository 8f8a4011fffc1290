//! Terminal banner shown at startup.

use colored::Colorize;

use crate::token::claims::TokenWindow;

pub fn print_banner() {
    println!();
    println!("{}", "╔═══════════════════════════════════════════════════════════╗".cyan());
    println!("{}", "║                                                           ║".cyan());
    println!("║     {}                                   ║", "🔏 authstamp v0.1.0".bold().white());
    println!("║     {}       ║", "Short-lived signed tokens, no storage".dimmed());
    println!("{}", "║                                                           ║".cyan());
    println!("{}", "╚═══════════════════════════════════════════════════════════╝".cyan());
    println!();
}

pub fn print_startup(addr: &str, window: &TokenWindow) {
    println!("{} {}", "✓".green().bold(), "Server ready".white().bold());
    println!("  {} {}", "→".dimmed(), format!("http://{}", addr).cyan().underline());
    println!();
    println!("{}", "Endpoints:".white().bold());
    println!("  {} {}  {}", "POST".yellow(), "/auth/token".white(), "Issue signed token".dimmed());
    println!("  {} {}            {}", "GET ".green(), "/".white(), "Redeem bearer token".dimmed());
    println!();
    println!(
        "{} valid from +{}s until +{}s after issue",
        "Window:".white().bold(),
        window.not_before().num_seconds(),
        window.expires_after().num_seconds()
    );
    println!();
}
