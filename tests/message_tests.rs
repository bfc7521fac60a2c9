use prince_buttons::{
    generate_message, quick_reply, url_button, Button, ButtonBuilder, ButtonConfig, ButtonError,
    MessageOptions, MessageRequest,
};
use serde_json::json;

#[test]
fn minimal_message_has_defaults_and_no_buttons() {
    let m = generate_message(MessageOptions::new("hi")).unwrap();
    assert_eq!(
        serde_json::to_value(&m).unwrap(),
        json!({"caption": "hi", "footer": "", "viewOnce": true, "headerType": 1})
    );
}

#[test]
fn empty_button_list_is_omitted() {
    let m = generate_message(MessageOptions::new("hi").buttons(Vec::<Button>::new())).unwrap();
    assert!(m.buttons.is_none());
    let v = serde_json::to_value(&m).unwrap();
    assert!(v.get("buttons").is_none());
}

#[test]
fn body_is_required() {
    let err = generate_message(MessageOptions::default()).unwrap_err();
    assert_eq!(
        err,
        ButtonError::InvalidArgument("body is required for generateMessage".into())
    );
}

#[test]
fn full_message_carries_media_and_buttons() {
    let m = generate_message(
        MessageOptions::new("Welcome")
            .footer("v2")
            .image("https://img")
            .video("https://vid")
            .buttons(vec![
                quick_reply("Commands", "menu_cmds").unwrap(),
                url_button("Tutorial", "https://youtube.com/tutorial").unwrap(),
            ]),
    )
    .unwrap();

    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["caption"], json!("Welcome"));
    assert_eq!(v["footer"], json!("v2"));
    // both media fields survive; the client decides what to do with them
    assert_eq!(v["image"], json!({"url": "https://img"}));
    assert_eq!(v["video"], json!({"url": "https://vid"}));
    assert_eq!(v["buttons"].as_array().unwrap().len(), 2);
    assert_eq!(v["buttons"][1]["type"], json!(2));
}

#[test]
fn builder_config_supplies_defaults() {
    let builder = ButtonBuilder::with_config(ButtonConfig {
        view_once: false,
        header_type: 1,
    });
    let m = builder.generate_message(MessageOptions::new("x")).unwrap();
    assert!(!m.view_once);
}

#[test]
fn options_deserialize_from_json() {
    let options: MessageOptions = serde_json::from_value(json!({
        "body": "typed",
        "viewOnce": false,
        "headerType": 3,
        "buttons": [{"buttonId": "a", "buttonText": {"displayText": "A"}, "type": 1}]
    }))
    .unwrap();
    let m = generate_message(options).unwrap();
    assert!(!m.view_once);
    assert_eq!(m.header_type, 3);
    let buttons = m.buttons.unwrap();
    assert_eq!(buttons[0].as_button().unwrap().button_id, "a");
}

#[test]
fn request_buttons_go_through_auto_detection() {
    let request: MessageRequest = serde_json::from_value(json!({
        "body": "Need help?",
        "footer": "Select an option below",
        "buttons": [
            {"text": "📜 Command List", "id": "help_commands"},
            {"text": "📖 Documentation", "url": "https://docs.example"}
        ]
    }))
    .unwrap();

    let m = ButtonBuilder::new().message_from_request(request).unwrap();
    let buttons = m.buttons.unwrap();
    assert_eq!(buttons.len(), 2);
    assert_eq!(buttons[0].as_button().unwrap().button_id, "help_commands");
    assert_eq!(
        buttons[1].as_button().unwrap().url.as_deref(),
        Some("https://docs.example")
    );
}

#[test]
fn request_without_buttons_omits_the_field() {
    let request: MessageRequest =
        serde_json::from_value(json!({"body": "plain", "buttons": null})).unwrap();
    let m = ButtonBuilder::new().message_from_request(request).unwrap();
    assert!(m.buttons.is_none());

    let request: MessageRequest =
        serde_json::from_value(json!({"body": "plain", "buttons": []})).unwrap();
    let m = ButtonBuilder::new().message_from_request(request).unwrap();
    assert!(m.buttons.is_none());
}
