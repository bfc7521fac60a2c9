//! Bot menus built with a custom `ButtonBuilder` configuration.
//!
//! Run with:
//! ```bash
//! cargo run --example advanced
//! ```

use prince_buttons::{
    create_list_data, ButtonBuilder, ButtonConfig, ListRow, ListSection, Message, MessageOptions,
};
use serde_json::json;

fn row(title: &str, description: &str, id: String) -> ListRow {
    ListRow {
        title: title.to_string(),
        description: description.to_string(),
        id,
    }
}

fn command_menu(pb: &ButtonBuilder, bot_name: &str, prefix: &str) -> anyhow::Result<Message> {
    let sections = vec![
        ListSection {
            title: "📥 Download Commands".into(),
            rows: vec![
                row("YouTube Video", "Download YouTube videos", format!("{prefix}ytdl")),
                row("Instagram Post", "Download Instagram content", format!("{prefix}igdl")),
                row("Facebook Video", "Download Facebook videos", format!("{prefix}fbdl")),
            ],
        },
        ListSection {
            title: "🔧 Utility Commands".into(),
            rows: vec![
                row("Sticker Maker", "Create stickers from images", format!("{prefix}sticker")),
                row("QR Generator", "Generate QR codes", format!("{prefix}qr")),
                row("Text to Speech", "Convert text to audio", format!("{prefix}tts")),
            ],
        },
    ];

    let list_data = create_list_data(&format!("{bot_name} Commands"), sections);
    let button = pb.list_button("📂 Open Command List", &list_data, Some("cmd_menu"))?;

    Ok(pb.generate_message(
        MessageOptions::new(format!(
            "🤖 {} COMMAND MENU\n\nTotal commands: 6\nPrefix: {prefix}\n\nSelect a category:",
            bot_name.to_uppercase()
        ))
        .footer("Use arrow keys to navigate")
        .buttons(vec![button]),
    )?)
}

fn help_message(pb: &ButtonBuilder, bot_name: &str) -> anyhow::Result<Message> {
    let buttons = pb.auto_detect(&json!([
        {"text": "📜 Command List", "id": "help_commands"},
        {"text": "🎥 Video Tutorial", "url": "https://youtube.com/watch?v=..."},
        {"text": "📖 Documentation", "url": "https://docs.princetechn.com"},
        {"text": "👥 Join Support", "url": "https://chat.whatsapp.com/..."}
    ]))?;

    Ok(pb.generate_message(
        MessageOptions::new(format!(
            "Need help with {bot_name}?\n\nHere are some useful options:"
        ))
        .footer("Select an option below")
        .buttons(buttons),
    )?)
}

fn group_admin_panel(pb: &ButtonBuilder) -> anyhow::Result<Message> {
    let buttons = pb.auto_detect(&json!([
        {"text": "🚫 Kick User", "id": "admin_kick"},
        {"text": "🔇 Mute User", "id": "admin_mute"},
        {"text": "👑 Promote", "id": "admin_promote"},
        {"text": "📊 Group Info", "id": "admin_info"},
        {"text": "⚙️ Settings", "id": "admin_settings"}
    ]))?;

    Ok(pb.generate_message(
        MessageOptions::new("👑 GROUP ADMIN PANEL\n\nManage your group with these tools:")
            .footer("Admin privileges required")
            .buttons(buttons),
    )?)
}

fn main() -> anyhow::Result<()> {
    let pb = ButtonBuilder::with_config(ButtonConfig {
        view_once: false,
        header_type: 1,
    });

    for (title, message) in [
        ("Command menu", command_menu(&pb, "PRINCE MD", ".")?),
        ("Help message", help_message(&pb, "PRINCE MD")?),
        ("Group admin panel", group_admin_panel(&pb)?),
    ] {
        println!("{title}:");
        println!("{}\n", serde_json::to_string_pretty(&message)?);
    }
    Ok(())
}
