//! Terminal rendering of chat events and complaint records.

use colored::Colorize;
use nagar_core::chat::{ChatEvent, Message, MessageStatus, NoticeVariant, Sender};
use nagar_core::complaint::ComplaintRecord;
use nagar_execution::DiagnosticEvent;

pub fn event(event: &ChatEvent) -> Option<String> {
    match event {
        ChatEvent::MessageAppended { message } | ChatEvent::MessageReplaced { message, .. } => {
            Some(self::message(message))
        }
        ChatEvent::TypingChanged { typing: true } => Some("…".bright_black().to_string()),
        ChatEvent::TypingChanged { typing: false } => None,
        ChatEvent::LanguageChanged { language } => {
            Some(format!("[language: {}]", language).bright_black().to_string())
        }
        ChatEvent::AttachmentChanged { attached } => Some(
            if *attached {
                "[image attached]"
            } else {
                "[image removed]"
            }
            .bright_black()
            .to_string(),
        ),
        ChatEvent::EcoPointsEarned { total, .. } => {
            Some(format!("[eco-points: {}]", total).bright_green().to_string())
        }
        ChatEvent::Notice { notice } => {
            let line = format!("* {}: {}", notice.title, notice.description);
            Some(match notice.variant {
                NoticeVariant::Default => line.yellow().to_string(),
                NoticeVariant::Destructive => line.red().to_string(),
            })
        }
        ChatEvent::Cleared => Some("--- conversation cleared ---".bright_black().to_string()),
    }
}

fn message(message: &Message) -> String {
    let mut text = match message.sender {
        Sender::User => format!("> {}", message.text).green().to_string(),
        Sender::Bot => match message.status {
            Some(MessageStatus::Pending) => message.text.yellow().to_string(),
            Some(MessageStatus::Error) => message.text.red().to_string(),
            _ => message.text.bright_blue().to_string(),
        },
    };
    if let Some(image) = message.attachment() {
        let name = image.file_name.as_deref().unwrap_or("image");
        text.push_str(&format!(" [{} {} bytes]", name, image.size).bright_black().to_string());
    }
    text
}

pub fn record(record: &ComplaintRecord) -> String {
    let mut lines = vec![
        format!("{} {}", record.id, record.status).bright_magenta().bold().to_string(),
        format!("Type:        {}", record.kind.display_name()),
        format!("Location:    {}", record.location),
        format!("Description: {}", record.description),
        format!(
            "Submitted {}, updated {}, estimated completion {}",
            record.date_submitted, record.last_updated, record.estimated_completion
        ),
        format!("Progress:    {}%", record.progress),
    ];
    if let Some(assigned) = &record.assigned_to {
        lines.push(format!("Assigned to: {}", assigned));
    }
    for update in &record.updates {
        lines.push(
            format!(
                "  {}  {:<12} {}",
                update.at.format("%Y-%m-%d %H:%M"),
                update.status.to_string(),
                update.description
            )
            .bright_black()
            .to_string(),
        );
    }
    lines.join("\n")
}

pub fn diagnostic(event: &DiagnosticEvent) -> String {
    format!("[{}] {}", event.level, event.message).red().to_string()
}
