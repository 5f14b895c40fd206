//! Demo fixtures inserted into an empty catalog at startup.

/// One app plus its screenshot gallery, in display order.
#[derive(Debug, Clone, Copy)]
pub struct AppFixture {
    pub name: &'static str,
    pub developer: &'static str,
    pub category: &'static str,
    pub age_rating: &'static str,
    pub description: &'static str,
    pub icon_url: &'static str,
    pub version: &'static str,
    pub size: &'static str,
    pub price: &'static str,
    pub rating: f64,
    pub screenshots: &'static [&'static str],
}

pub const DEMO_APPS: &[AppFixture] = &[
    AppFixture {
        name: "Сбербанк Онлайн",
        developer: "ПАО Сбербанк",
        category: "Финансы",
        age_rating: "6+",
        description: "Банковское приложение для управления счетами",
        icon_url: "/icons/sber.png",
        version: "12.24.0",
        size: "185 МБ",
        price: "Бесплатно",
        rating: 4.5,
        screenshots: &[
            "/screenshots/sber_1.jpg",
            "/screenshots/sber_2.jpg",
            "/screenshots/sber_3.jpg",
        ],
    },
    AppFixture {
        name: "Тинькофф",
        developer: "Тинькофф Банк",
        category: "Финансы",
        age_rating: "6+",
        description: "Мобильный банк для платежей и переводов",
        icon_url: "/icons/tinkoff.png",
        version: "5.31.0",
        size: "210 МБ",
        price: "Бесплатно",
        rating: 4.7,
        screenshots: &[
            "/screenshots/tinkoff_1.jpg",
            "/screenshots/tinkoff_2.jpg",
            "/screenshots/tinkoff_3.jpg",
        ],
    },
    AppFixture {
        name: "Clash Royale",
        developer: "Supercell",
        category: "Игры",
        age_rating: "0+",
        description: "Карточная стратегия в реальном времени",
        icon_url: "/icons/clash_royale.png",
        version: "1.5.3",
        size: "285 МБ",
        price: "Бесплатно",
        rating: 4.8,
        screenshots: &[
            "/screenshots/clash_1.jpg",
            "/screenshots/clash_2.jpg",
            "/screenshots/clash_3.jpg",
        ],
    },
    AppFixture {
        name: "Госуслуги",
        developer: "Энвижн Груп",
        category: "Государственные",
        age_rating: "16+",
        description: "Портал государственных услуг",
        icon_url: "/icons/gosuslugi.png",
        version: "4.15.2",
        size: "320 МБ",
        price: "Бесплатно",
        rating: 4.3,
        screenshots: &[
            "/screenshots/gosuslugi_1.jpg",
            "/screenshots/gosuslugi_2.jpg",
            "/screenshots/gosuslugi_3.jpg",
        ],
    },
    AppFixture {
        name: "Яндекс Go",
        developer: "Яндекс",
        category: "Транспорт",
        age_rating: "6+",
        description: "Заказ такси и доставки еды",
        icon_url: "/icons/yandex_go.png",
        version: "7.45.0",
        size: "275 МБ",
        price: "Бесплатно",
        rating: 4.6,
        screenshots: &[
            "/screenshots/yandex_go_1.jpg",
            "/screenshots/yandex_go_2.jpg",
            "/screenshots/yandex_go_3.jpg",
        ],
    },
    AppFixture {
        name: "Калькулятор+",
        developer: "Tools Pro",
        category: "Инструменты",
        age_rating: "0+",
        description: "Научный калькулятор",
        icon_url: "/icons/calculator.png",
        version: "3.2.1",
        size: "35 МБ",
        price: "Бесплатно",
        rating: 4.4,
        screenshots: &[
            "/screenshots/calculator_1.jpg",
            "/screenshots/calculator_2.jpg",
            "/screenshots/calculator_3.jpg",
        ],
    },
];
