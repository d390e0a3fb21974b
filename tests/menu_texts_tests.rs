//! # Menu Text Tests
//!
//! The static texts sent by the menu, pinned to their exact Russian wording.

use english_with_ai::bot::{Inbound, Navigator};
use english_with_ai::config::DEFAULT_PROMPTS_URL;
use english_with_ai::localization::Catalog;
use english_with_ai::menu::Level;

const MATERIALS_BEGINNER_RU: &str = r#"🐣 Начинающий (A1-A2)

Для данного уровня я рекомендую такие материалы:

📝 Лексика:
• English Vocabulary In Use: https://vk.com/doc138611568_629793650
• Outcomes Beginner: https://disk.yandex.ru/d/k8ydGTz5WBQN7g
• Outcomes Elementary: https://disk.yandex.ru/d/Z_-pkpbxgWibvA
• Outcomes Pre-Intermediate: https://disk.yandex.ru/d/gBBwQSCEm9P_lw

📚 Грамматика:
• English Grammar In Use: https://vk.com/doc241436692_682916970
• My Grammar Lab A1-A2: https://drive.google.com/file/d/1KM09Ho5zgsLBj_wL0O97-ANO3TkDw-F1/view
• English File: https://disk.yandex.ru/d/5qtzvweu3Hus7g

🎤 Говорение:
• Speak Out: https://disk.yandex.ru/d/fid3nycJcdrCcA

🧏‍♀️ Аудирование (доп):
• Фильмы и сериалы в оригинале: https://inoriginal.net/"#;

const MATERIALS_INTERMEDIATE_RU: &str = r#"🌱 Средний (B1-B2)

Для данного уровня я рекомендую такие материалы:

📝 Лексика:
• English Vocabulary In Use: https://vk.com/doc138611568_629793645
• Outcomes Intermediate: https://disk.yandex.ru/d/EQ-uPgfoUNl89Q
• Outcomes Upper-Intermediate: https://disk.yandex.ru/d/46TxuCCjDzDqFw

📚 Грамматика:
• English Grammar In Use: https://vk.ru/doc241436692_682916965
• Destination B1: https://vk.ru/doc229619217_590305691
• Destination B2: https://vk.ru/doc229619217_590305740
• My Grammar Lab B1-B2: https://drive.google.com/file/d/18zlut8jtQVm0cZ_VxFwY4_bXj_00NQ-Q/view
• English File: https://disk.yandex.ru/d/5qtzvweu3Hus7g

🎤 Говорение:
• Speak Out: https://disk.yandex.ru/d/fid3nycJcdrCcA

🧏‍♀️ Аудирование (доп):
• Фильмы и сериалы в оригинале: https://inoriginal.net/"#;

const MATERIALS_ADVANCED_RU: &str = r#"🌳 Продвинутый (C1-C2)

Для данного уровня я рекомендую такие материалы:

📝 Лексика:
• Outcomes Advanced: https://disk.yandex.ru/d/t2cf9dv8CtLaiQ
• English Vocabulary In Use: https://vk.com/doc138611568_629793655

📚 Грамматика:
• English Grammar In Use: https://vk.com/doc241436692_682916979
• Destination C1-C2: https://vk.ru/doc229619217_590305824
• English File: https://disk.yandex.ru/d/5qtzvweu3Hus7g

🎤 Говорение:
• Speak Out: https://disk.yandex.ru/d/fid3nycJcdrCcA

🧏‍♀️ Аудирование (доп):
• Фильмы и сериалы в оригинале: https://inoriginal.net/"#;

const AI_TOOLS_RU: &str = r#"🤖 Нейросети для изучения английского языка

🗣️ Разговорная практика и произношение:
• ChatGPT - практика письменного и устного диалога
• Elsa Speak - коррекция акцента и произношения
• Soul Machines - практика с AI-аватарами
• GetPronounce - тренировка фонетических навыков
• Speechling - анализ произношения, интонации, ритма

📚 Изучение слов и лексики:
• Duolingo & Max - адаптивные платформы
• Quizlet - запоминание слов с флеш-карт
• YouGlish - контекстные примеры из видео
• PlayPhrase.me - примеры из фильмов и сериалов

📝 Грамматика и письмо:
• ChatGPT - проверка грамматики и редактирование
• Quillbot AI - проверка, перефразировка, перевод
• Grammar Check - проверка грамматики

👂 Аудирование и восприятие речи:
• Natural Readers - озвучивание текста
• YouGlish - разные акценты и скорость речи
• PlayPhrase.me - произношение в контексте

⚠️ Важно помнить, что эффективное использование ИИ начинается с качественных промптов (запросов или инструкций для нейросети)! 🌟"#;

fn navigator() -> Navigator {
    Navigator::new(
        Catalog::load("ru").expect("catalog should load"),
        DEFAULT_PROMPTS_URL,
    )
}

fn press(data: &str) -> Inbound {
    Inbound::Callback {
        query_id: "cb".to_string(),
        chat_id: 1,
        first_name: None,
        language_code: Some("ru".to_string()),
        data: Some(data.to_string()),
    }
}

#[test]
fn test_level_materials_match_published_text() {
    let navigator = navigator();
    let expected = [
        (Level::Beginner, MATERIALS_BEGINNER_RU),
        (Level::Intermediate, MATERIALS_INTERMEDIATE_RU),
        (Level::Advanced, MATERIALS_ADVANCED_RU),
    ];

    for (level, text) in expected {
        let transition = navigator
            .handle(&press(&level.callback_data()))
            .expect("level selection is handled");
        assert_eq!(transition.replies[0].text, text, "materials for {}", level);
    }
}

#[test]
fn test_ai_tools_text_is_complete() {
    let navigator = navigator();

    for data in ["show_ai_tools", "ai"] {
        let transition = navigator.handle(&press(data)).expect("AI tools are handled");
        assert_eq!(transition.replies[0].text, AI_TOOLS_RU);
    }
}

#[test]
fn test_ai_tools_ends_with_prompts_reminder() {
    let catalog = Catalog::load("ru").unwrap();

    for locale in ["ru", "en"] {
        let text = catalog.get_message("ai-tools", locale, None);
        let last_line = text.lines().last().unwrap_or_default();
        assert!(last_line.starts_with("⚠️"), "{}: {:?}", locale, last_line);
        assert!(last_line.ends_with("! 🌟"), "{}: {:?}", locale, last_line);
    }
}
