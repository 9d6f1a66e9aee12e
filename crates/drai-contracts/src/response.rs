//! Canned chat replies and the quick-question catalogue.

use serde::{Deserialize, Serialize};

/// The five reply categories the AI doctor can answer with.
///
/// Each category is bound to exactly one fixed reply string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCategory {
    Headache,
    ColdSymptoms,
    Medicine,
    DoctorVisit,
    #[default]
    Unknown,
}

impl ResponseCategory {
    /// Every category, in dispatch priority order.
    pub const ALL: [ResponseCategory; 5] = [
        ResponseCategory::Headache,
        ResponseCategory::ColdSymptoms,
        ResponseCategory::Medicine,
        ResponseCategory::DoctorVisit,
        ResponseCategory::Unknown,
    ];

    /// The fixed reply text for this category.
    pub fn reply(self) -> &'static str {
        match self {
            ResponseCategory::Headache => {
                "سردرد می‌تواند ناشی از دلایل مختلفی باشد، مانند استرس، کم‌آبی بدن، یا خستگی. آیا علائم دیگری هم دارید؟"
            }
            ResponseCategory::ColdSymptoms => {
                "علائم معمول سرماخوردگی شامل آبریزش بینی، گلودرد، سرفه، عطسه و گاهی تب خفیف است. استراحت، نوشیدن مایعات و داروهای بدون نسخه می‌تواند کمک کننده باشد."
            }
            ResponseCategory::Medicine => {
                "بدون اطلاعات دقیق در مورد علائم و وضعیت سلامتی شما، نمی‌توانم داروی خاصی را توصیه کنم. لطفاً علائم خود را با جزئیات بیشتری توضیح دهید."
            }
            ResponseCategory::DoctorVisit => {
                "اگر علائم شدید دارید، بیش از چند روز ادامه داشته، یا نگران کننده هستند، مراجعه به پزشک توصیه می‌شود. آیا می‌توانید علائم خود را توضیح دهید؟"
            }
            ResponseCategory::Unknown => {
                "متوجه نشدم. لطفاً سوال خود را به شکل دیگری بپرسید یا جزئیات بیشتری ارائه دهید."
            }
        }
    }
}

/// Greeting shown when a chat session opens.
pub const WELCOME_MESSAGE: &str =
    "سلام! من دستیار پزشکی هوش مصنوعی شما هستم. چطور می‌توانم کمک کنم؟";

/// A predefined question button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickQuestion {
    pub id: String,
    pub text: String,
    pub icon: String,
}

/// The four quick questions offered under the chat input.
pub fn quick_questions() -> Vec<QuickQuestion> {
    [
        ("q1", "من سردرد دارم", "head-side-virus"),
        ("q2", "علائم سرماخوردگی", "thermometer"),
        ("q3", "چه داروهایی مصرف کنم؟", "pills"),
        ("q4", "آیا باید به پزشک مراجعه کنم؟", "user-md"),
    ]
    .into_iter()
    .map(|(id, text, icon)| QuickQuestion {
        id: id.to_string(),
        text: text.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}
