//! Canned bot texts.
//!
//! Keyword tables are matched against the lower-cased user input by
//! substring, in declaration order. Hindi mode matches both the English and
//! the Devanagari keywords of an entry.

use crate::chat::{ChatLanguage, Notice};

/// Inputs containing any of these switch the reply language to Hindi.
pub const SWITCH_TO_HINDI: &[&str] = &["hindi", "हिंदी"];

/// Inputs containing any of these switch back to English (Hindi mode only).
pub const SWITCH_TO_ENGLISH: &[&str] = &["english", "अंग्रेजी"];

/// With an image attached, any of these (or an empty input) starts waste analysis.
pub const WASTE_ANALYSIS_KEYWORDS: &[&str] =
    &["waste", "trash", "garbage", "recycle", "dispose", "identify"];

/// One row of a keyword table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordReply {
    /// Topic name used when referring back to the request ("water").
    pub topic: &'static str,
    pub english_keywords: &'static [&'static str],
    pub hindi_keywords: &'static [&'static str],
    pub english: &'static str,
    pub hindi: &'static str,
    /// Two-letter tracking prefix for topics that register a complaint.
    pub complaint_prefix: Option<&'static str>,
}

impl KeywordReply {
    /// Returns true if `lower_input` contains one of this row's keywords.
    pub fn matches(&self, lower_input: &str, language: ChatLanguage) -> bool {
        let english = self.english_keywords.iter().any(|k| lower_input.contains(k));
        match language {
            ChatLanguage::English => english,
            ChatLanguage::Hindi => {
                english || self.hindi_keywords.iter().any(|k| lower_input.contains(k))
            }
        }
    }

    pub fn reply(&self, language: ChatLanguage) -> &'static str {
        match language {
            ChatLanguage::English => self.english,
            ChatLanguage::Hindi => self.hindi,
        }
    }

    /// Whether answering this row files a complaint with a tracking ID.
    pub fn files_complaint(&self) -> bool {
        self.complaint_prefix.is_some()
    }
}

/// Waste-domain groups, checked before the general table.
pub static DOMAIN_GROUPS: &[KeywordReply] = &[
    KeywordReply {
        topic: "organic",
        english_keywords: &["organic waste", "food waste", "compost"],
        hindi_keywords: &["जैविक", "खाद"],
        english: "Organic waste should be placed in green bins. It can be composted to create nutrient-rich soil. The municipality collects organic waste on Mondays and Thursdays.",
        hindi: "जैविक कचरे को हरे डिब्बों में रखा जाना चाहिए। इसे खाद बनाकर पोषक तत्वों से भरपूर मिट्टी बनाई जा सकती है। नगर पालिका सोमवार और गुरुवार को जैविक कचरा एकत्र करती है।",
        complaint_prefix: None,
    },
    KeywordReply {
        topic: "recyclable",
        english_keywords: &["recyclable", "recycle"],
        hindi_keywords: &["रीसाइकिल"],
        english: "Recyclable materials like paper, plastic, glass, and metal should be cleaned and placed in blue bins. Make sure to separate different types of recyclables according to local guidelines.",
        hindi: "कागज, प्लास्टिक, कांच और धातु जैसी रीसाइकिल सामग्री को साफ करके नीले बिन में रखा जाना चाहिए। स्थानीय दिशानिर्देशों के अनुसार विभिन्न प्रकार के रीसाइकिल को अलग करना सुनिश्चित करें।",
        complaint_prefix: None,
    },
    KeywordReply {
        topic: "hazardous",
        english_keywords: &["hazardous", "batteries", "chemical", "electronic"],
        hindi_keywords: &["खतरनाक", "बैटरी"],
        english: "Hazardous waste requires special handling. Never mix with regular trash. Take items like batteries, electronics, and chemicals to the designated collection center at Environmental Complex, Civil Lines, open on the first Saturday of each month.",
        hindi: "खतरनाक कचरे के लिए विशेष हैंडलिंग की आवश्यकता होती है। कभी भी नियमित कचरे के साथ न मिलाएं। बैटरी, इलेक्ट्रॉनिक्स और रसायन जैसी वस्तुओं को पर्यावरण कॉम्प्लेक्स, सिविल लाइंस में नामित संग्रह केंद्र पर ले जाएं, जो हर महीने के पहले शनिवार को खुला रहता है।",
        complaint_prefix: None,
    },
];

/// General municipal topics.
pub static GENERAL_REPLIES: &[KeywordReply] = &[
    KeywordReply {
        topic: "hello",
        english_keywords: &["hello"],
        hindi_keywords: &["नमस्ते"],
        english: "Hello! How can I assist you with municipal services today?",
        hindi: "नमस्ते! मैं आज नगरपालिका सेवाओं में आपकी कैसे सहायता कर सकता हूँ?",
        complaint_prefix: None,
    },
    KeywordReply {
        topic: "garbage",
        english_keywords: &["garbage"],
        hindi_keywords: &["कचरा"],
        english: "I'm sorry about the garbage problem. I've registered your complaint with the Sanitation Department and a team will clear it within 24 hours. Your tracking ID is ",
        hindi: "कचरे की समस्या के लिए खेद है। मैंने आपकी शिकायत स्वच्छता विभाग में दर्ज कर दी है और 24 घंटे के भीतर टीम इसे साफ कर देगी। आपका ट्रैकिंग आईडी है ",
        complaint_prefix: Some("GC"),
    },
    KeywordReply {
        topic: "water",
        english_keywords: &["water"],
        hindi_keywords: &["पानी", "जल"],
        english: "I've logged your water supply issue with the Water Department. A maintenance crew will inspect the line shortly. Your tracking ID is ",
        hindi: "मैंने आपकी जल आपूर्ति समस्या जल विभाग में दर्ज कर दी है। रखरखाव दल जल्द ही लाइन का निरीक्षण करेगा। आपका ट्रैकिंग आईडी है ",
        complaint_prefix: Some("WS"),
    },
    KeywordReply {
        topic: "road",
        english_keywords: &["road", "pothole"],
        hindi_keywords: &["सड़क", "गड्ढा"],
        english: "Thank you for reporting the road problem. The Public Works Department has scheduled a site inspection. Your tracking ID is ",
        hindi: "सड़क की समस्या की जानकारी देने के लिए धन्यवाद। लोक निर्माण विभाग ने स्थल निरीक्षण निर्धारित किया है। आपका ट्रैकिंग आईडी है ",
        complaint_prefix: Some("RM"),
    },
    KeywordReply {
        topic: "tax",
        english_keywords: &["tax"],
        hindi_keywords: &["टैक्स", "संपत्ति कर"],
        english: "You can pay property tax online through the municipal portal using your property ID, or in person at any ward office. A 5% rebate applies to payments made before 30 June.",
        hindi: "आप अपनी संपत्ति आईडी से नगरपालिका पोर्टल पर ऑनलाइन या किसी भी वार्ड कार्यालय में संपत्ति कर का भुगतान कर सकते हैं। 30 जून से पहले भुगतान पर 5% छूट मिलती है।",
        complaint_prefix: None,
    },
    KeywordReply {
        topic: "certificate",
        english_keywords: &["certificate"],
        hindi_keywords: &["प्रमाणपत्र"],
        english: "Birth and death certificates can be requested online or at the Citizen Service Centre with a valid ID proof. They are usually issued within 7 working days.",
        hindi: "जन्म और मृत्यु प्रमाणपत्र के लिए ऑनलाइन या वैध पहचान पत्र के साथ नागरिक सेवा केंद्र पर आवेदन किया जा सकता है। ये आमतौर पर 7 कार्य दिवसों में जारी होते हैं।",
        complaint_prefix: None,
    },
    KeywordReply {
        topic: "streetlight",
        english_keywords: &["streetlight", "street light"],
        hindi_keywords: &["स्ट्रीट लाइट"],
        english: "Faulty streetlights are repaired by the Electrical Department within 48 hours of a report. Please share the pole number or a nearby landmark.",
        hindi: "खराब स्ट्रीट लाइट की शिकायत के 48 घंटे के भीतर विद्युत विभाग उसे ठीक करता है। कृपया खंभा संख्या या पास का कोई स्थान बताएं।",
        complaint_prefix: None,
    },
    KeywordReply {
        topic: "collection",
        english_keywords: &["collection", "schedule"],
        hindi_keywords: &["संग्रह"],
        english: "Household waste is collected daily between 7 AM and 10 AM. Organic waste goes out on Mondays and Thursdays, recyclables on Tuesdays and Fridays.",
        hindi: "घरेलू कचरा प्रतिदिन सुबह 7 से 10 बजे के बीच एकत्र किया जाता है। जैविक कचरा सोमवार और गुरुवार को, रीसाइकिल सामग्री मंगलवार और शुक्रवार को एकत्र की जाती है।",
        complaint_prefix: None,
    },
];

/// First bot message of a fresh conversation.
pub fn greeting(language: ChatLanguage) -> &'static str {
    language.pick(
        "Hello! I'm Nagarsathi, your municipal assistant. How can I help you today?",
        "नमस्ते! मैं नगरसाथी हूँ, आपका नगरपालिका सहायक। मैं आज आपकी कैसे सहायता कर सकता हूँ?",
    )
}

/// Reply after the language changed to `language`.
pub fn welcome(language: ChatLanguage) -> &'static str {
    language.pick(
        "I've switched to English. How can I help you today?",
        "मैंने हिंदी में स्विच कर लिया है। मैं आपकी कैसे सहायता कर सकता हूँ?",
    )
}

/// Placeholder text while an image is being analysed.
pub fn analysis_pending(language: ChatLanguage) -> &'static str {
    language.pick(
        "Analyzing your waste image... This will take just a moment.",
        "आपकी कचरे की छवि का विश्लेषण किया जा रहा है... यह बस एक क्षण लेगा।",
    )
}

/// Replaces the placeholder when the classifier fails.
pub fn analysis_failed(language: ChatLanguage) -> &'static str {
    language.pick(
        "Sorry, I couldn't analyze that image. Please try again with a clearer photo.",
        "क्षमा करें, मैं उस छवि का विश्लेषण नहीं कर सका। कृपया एक स्पष्ट फ़ोटो के साथ पुनः प्रयास करें।",
    )
}

pub fn gamification(language: ChatLanguage, points: u32) -> String {
    match language {
        ChatLanguage::English => format!(
            "🌱 Great job identifying waste correctly! You've earned {points} eco-points. Keep properly disposing of waste to earn more points and badges."
        ),
        ChatLanguage::Hindi => format!(
            "🌱 कचरे की सही पहचान के लिए शाबाश! आपने {points} इको-पॉइंट्स अर्जित किए हैं। अधिक अंक और बैज अर्जित करने के लिए कचरे का उचित निपटान करते रहें।"
        ),
    }
}

pub fn fallback(language: ChatLanguage) -> &'static str {
    language.pick(
        "I'm sorry, I don't have information about that. Please contact our helpdesk for assistance.",
        "क्षमा करें, मेरे पास इसके बारे में जानकारी नहीं है। सहायता के लिए कृपया हमारे हेल्पडेस्क से संपर्क करें।",
    )
}

/// Acknowledgement for an image sent without a waste question.
pub fn image_report(language: ChatLanguage, tracking_id: &str) -> String {
    match language {
        ChatLanguage::English => format!(
            "Thank you for the image. I can see this is an issue that needs attention. I've logged this complaint with high priority. Expect resolution within 24 hours. Your tracking ID is #{tracking_id}"
        ),
        ChatLanguage::Hindi => format!(
            "छवि के लिए धन्यवाद। मैं देख सकता हूँ कि यह एक ऐसी समस्या है जिस पर ध्यान देने की आवश्यकता है। मैंने इस शिकायत को उच्च प्राथमिकता के साथ दर्ज किया है। 24 घंटे के भीतर समाधान की उम्मीद करें। आपका ट्रैकिंग आईडी है #{tracking_id}"
        ),
    }
}

/// Delayed follow-up for a complaint registered from a keyword.
pub fn status_update(language: ChatLanguage, topic: &str) -> String {
    match language {
        ChatLanguage::English => format!(
            "UPDATE: Your {topic} complaint has been assigned to our field team. They will reach the location soon."
        ),
        ChatLanguage::Hindi => format!(
            "अपडेट: आपकी {topic} शिकायत हमारी फील्ड टीम को सौंप दी गई है। वे जल्द ही स्थान पर पहुंचेंगे।"
        ),
    }
}

pub fn language_changed_notice(language: ChatLanguage) -> Notice {
    Notice::info(
        language.pick("Language Changed", "भाषा बदली गई"),
        language.pick("Now chatting in English", "अब हिंदी में चैट करें"),
    )
}

pub fn eco_points_notice(language: ChatLanguage, points: u32) -> Notice {
    match language {
        ChatLanguage::English => Notice::info(
            format!("+{points} Eco-Points Earned!"),
            "Thank you for proper waste identification",
        ),
        ChatLanguage::Hindi => Notice::info(
            format!("+{points} इको-पॉइंट्स अर्जित!"),
            "उचित कचरा पहचान के लिए धन्यवाद",
        ),
    }
}

pub fn image_logged_notice(language: ChatLanguage) -> Notice {
    Notice::info(
        language.pick("Image Analysis Complete", "छवि विश्लेषण पूर्ण"),
        language.pick("Issue identified and logged", "समस्या पहचानी और दर्ज की गई"),
    )
}

/// Shown when a second analysis is requested while one is still running.
pub fn analysis_busy_notice(language: ChatLanguage) -> Notice {
    Notice::info(
        language.pick("Analysis in progress", "विश्लेषण जारी है"),
        language.pick(
            "Please wait for the current image analysis to finish.",
            "कृपया वर्तमान छवि विश्लेषण पूरा होने की प्रतीक्षा करें।",
        ),
    )
}

pub fn image_attached_notice() -> Notice {
    Notice::info(
        "Image Attached",
        "Your image has been attached. Send to analyze waste type.",
    )
}

/// Input prefilled when an image is attached to an empty input box.
pub const IDENTIFY_PROMPT: &str =
    "Please identify this waste and tell me how to dispose of it properly";
