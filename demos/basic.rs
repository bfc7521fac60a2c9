//! Basic usage of the button builders.
//!
//! Run with:
//! ```bash
//! cargo run --example basic
//! ```

use prince_buttons::{
    auto_detect, call_button, create_list_data, create_row, create_section, download_buttons,
    generate_message, help_buttons, list_button, quick_reply, url_button, MessageOptions,
};
use serde_json::json;

fn show<T: serde::Serialize>(title: &str, value: &T) -> anyhow::Result<()> {
    println!("{title}");
    println!("{}\n", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    show("Quick reply button:", &quick_reply("Start Chat", "start_chat")?)?;
    show(
        "URL button:",
        &url_button("Visit GitHub", "https://github.com/PrinceTech-org")?,
    )?;
    show("Call button:", &call_button("Call Support", "+94712345678")?)?;

    let list_data = create_list_data(
        "Main Menu",
        vec![create_section(
            "Bot Commands",
            vec![
                create_row("🎮 Games", "Fun games", "games"),
                create_row("🔧 Tools", "Useful tools", "tools"),
                create_row("⚙️ Settings", "Bot settings", "settings"),
            ],
        )],
    );
    show("List button:", &list_button("📂 Open Menu", &list_data)?)?;

    let buttons = auto_detect(&json!([
        {"text": "Commands", "id": "menu_cmds"},
        {"text": "Tutorial", "url": "https://youtube.com/tutorial"},
        {"text": "Support", "id": "menu_support"}
    ]))?;
    let message = generate_message(
        MessageOptions::new("Welcome to Prince Bot! 🤖\n\nSelect an option below:")
            .footer("Version 2.0 | Prince Tech © 2024")
            .image("https://princetechn.com/logo.png")
            .buttons(buttons),
    )?;
    show("Complete message:", &message)?;

    show(
        "Auto-detection:",
        &auto_detect(&json!([
            {"text": "Quick Reply", "id": "qr1"},
            {"text": "Open Website", "url": "https://princetechn.com"},
            {"text": "Call Support", "phone": "+94712345678"}
        ]))?,
    )?;

    show("Help buttons:", &help_buttons())?;
    show("Download buttons:", &download_buttons())?;
    Ok(())
}
