//! User-facing reply texts (Ukrainian)

use super::pieces::PieceIndex;

pub const WELCOME: &str = "Привіт! Скануй QR-коди, щоб зібрати частини картини!";
pub const FAKE_CODE: &str = "😅 Це фейковий код! Шукай далі справжні частини.";
pub const UNKNOWN_PIECE: &str = "Невідома частина картини.";
pub const UNKNOWN_CODE: &str = "🤔 Я не впізнаю цей код. Це не частина і не фейк.";
pub const PIECE_IMAGE_MISSING: &str = "(Зображення частини не знайдено)";
pub const FULL_IMAGE_MISSING: &str = "(Повне зображення не знайдено)";
pub const CONGRATULATIONS: &str = "🎉 Вітаємо! Ти зібрав всю картину!";
pub const RESET_DONE: &str = "🔁 Твій прогрес очищено. Почни заново!";
pub const NOTHING_TO_RESET: &str = "🤔 У тебе ще не було прогресу.";

pub const FOUND_LABEL: &str = "🧩 Знайдено:";
pub const MISSING_LABEL: &str = "🔍 Ще залишилось:";
pub const COMPLETE_BANNER: &str = "🎯 УРА! Ти зібрав всю картину!";

pub fn piece_claimed(piece: PieceIndex) -> String {
    format!("🎉 Ти знайшов частину #{}!", piece)
}

pub fn piece_already_owned(piece: PieceIndex) -> String {
    format!("✅ Частина #{} вже знайдена.", piece)
}
