use nagar_core::chat::ChatLanguage;
use nagar_core::lexicon::{Route, route};

pub fn run(text: &str, language: ChatLanguage, has_image: bool) {
    let route = route(text, language, has_image);
    println!("route: {}", route.name());
    match route {
        Route::Keyword(reply) => {
            println!("topic: {}", reply.topic);
            println!("{}", reply.reply(language));
            if let Some(prefix) = reply.complaint_prefix {
                println!("(files a complaint with prefix {})", prefix);
            }
        }
        Route::ImageReport(Some(reply)) => {
            println!("topic: {}", reply.topic);
            if reply.files_complaint() {
                println!("(schedules a status update)");
            }
        }
        Route::SwitchLanguage(target) => println!("switches to {}", target),
        Route::AnalyzeWaste | Route::ImageReport(None) | Route::Fallback => {}
    }
}
