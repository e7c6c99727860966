//! Fixed banners: welcome, agent greeting, capabilities, farewell.

use std::io::{self, Write};

use super::layout::{field_row, panel};

/// What the agent can do, as advertised in the capability table.
const CAPABILITIES: [&str; 5] = [
    "Email management",
    "SMS/text messaging",
    "Unified messaging",
    "Contact management",
    "Draft/Send distinction",
];

/// Demo welcome panel.
pub fn welcome(out: &mut impl Write) -> io::Result<()> {
    panel(
        out,
        Some("🌟 Quantum Garden Demo"),
        &[
            "Welcome to Quantum Garden!",
            "",
            "This demo shows Firefly, our AI-powered email agent,",
            "helping you achieve Inbox Zero with intelligent assistance.",
            "",
            "Features demonstrated:",
            "• AI suggestions for each email",
            "• Draft/Send safety distinction",
            "• Bulk operations (archive all older)",
            "• Interactive email processing",
            "• Processing statistics",
            "",
            "Let's see Firefly in action!",
        ],
    )
}

/// Agent greeting panel.
pub fn greeting(out: &mut impl Write) -> io::Result<()> {
    let heading = format!(
        "✨ Firefly Communication Agent v{}",
        env!("CARGO_PKG_VERSION")
    );
    panel(
        out,
        Some("✨ Firefly Activated"),
        &[
            &heading,
            "",
            "I handle all your communication needs:",
            "• Email (all providers)",
            "• SMS/text messaging",
            "• WhatsApp, Telegram, etc.",
            "• Contact management",
            "",
            "Safety First: I always draft before sending!",
        ],
    )
}

/// Capability table.
pub fn capabilities(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "✨ Firefly Capabilities")?;
    writeln!(out)?;
    for capability in CAPABILITIES {
        field_row(out, "✅", capability)?;
    }
    Ok(())
}

/// Closing lines.
pub fn farewell(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Thank you for trying Quantum Garden!")?;
    writeln!(
        out,
        "Visit {} to learn more",
        env!("CARGO_PKG_REPOSITORY")
    )?;
    writeln!(out)
}
