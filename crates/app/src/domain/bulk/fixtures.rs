//! Canonical storefront catalog.

use jiff::Timestamp;

use crate::domain::{
    categories::records::{CategoryId, CategoryRecord},
    products::records::{ProductId, ProductRecord, WeightPrice},
};

pub(crate) struct CategoryFixture {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) slug: &'static str,
}

pub(crate) struct ProductFixture {
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) category_id: &'static str,
    pub(crate) image: &'static str,
    pub(crate) base_price: f64,
    pub(crate) weight_prices: &'static [(&'static str, f64)],
}

pub(crate) const CATEGORIES: [CategoryFixture; 6] = [
    CategoryFixture { id: "cat-honey", name: "Мёд", slug: "honey" },
    CategoryFixture { id: "cat-bee", name: "Пчелопродукты", slug: "bee-products" },
    CategoryFixture { id: "cat-tincture", name: "Настойки", slug: "tinctures" },
    CategoryFixture { id: "cat-cream", name: "Крема", slug: "creams" },
    CategoryFixture { id: "cat-candle", name: "Свечи", slug: "candles" },
    CategoryFixture { id: "cat-accessory", name: "Аксессуары", slug: "accessories" },
];

const HONEY_WEIGHTS: &[(&str, f64)] = &[
    ("250гр", 1201.0),
    ("340гр", 1500.0),
    ("550гр", 2200.0),
    ("750гр", 2800.0),
    ("1кг", 3500.0),
    ("1.5кг", 5000.0),
];

pub(crate) const PRODUCTS: &[ProductFixture] = &[
    ProductFixture {
        name: "Мёд Разнотравье",
        description: "Наш мёд \"Разнотравье\" собран в экологически чистых районах с десятков видов луговых цветов. Он обладает неповторимым многогранным ароматом и мягким, обволакивающим вкусом. Этот сорт считается универсальным помощником для укрепления иммунитета и общего тонуса организма.",
        category_id: "cat-honey",
        image: "https://images.unsplash.com/photo-1587049352846-4a222e784d38?w=800",
        base_price: 1201.0,
        weight_prices: HONEY_WEIGHTS,
    },
    ProductFixture {
        name: "Мёд Подсолнух",
        description: "Мёд из подсолнечника - один из самых популярных сортов. Отличается ярко-жёлтым цветом и приятным ароматом. Быстро кристаллизуется, образуя мелкозернистую структуру.",
        category_id: "cat-honey",
        image: "https://images.unsplash.com/photo-1558642452-9d2a7deb7f62?w=800",
        base_price: 1200.0,
        weight_prices: HONEY_WEIGHTS,
    },
    ProductFixture {
        name: "Мёд Царский Бархат",
        description: "Элитный сорт мёда с нежнейшей кремовой текстурой. Обладает изысканным вкусом с легкими нотками ванили и карамели.",
        category_id: "cat-honey",
        image: "https://images.unsplash.com/photo-1471943311424-646960669fbc?w=800",
        base_price: 1800.0,
        weight_prices: HONEY_WEIGHTS,
    },
    ProductFixture {
        name: "Мёд Цветочный",
        description: "Классический цветочный мёд, собранный с разнообразных медоносов. Обладает гармоничным вкусом и богатым ароматом летних цветов.",
        category_id: "cat-honey",
        image: "https://images.unsplash.com/photo-1601063476271-a159c71ab0b3?w=800",
        base_price: 1200.0,
        weight_prices: HONEY_WEIGHTS,
    },
    ProductFixture {
        name: "Мёд Гречишный",
        description: "Тёмный мёд с насыщенным вкусом и характерным терпким послевкусием. Богат железом и антиоксидантами.",
        category_id: "cat-honey",
        image: "https://images.unsplash.com/photo-1612257416648-ee7a6c533b4b?w=800",
        base_price: 1200.0,
        weight_prices: HONEY_WEIGHTS,
    },
    ProductFixture {
        name: "Пыльца цветочная",
        description: "Натуральная цветочная пыльца - кладезь витаминов и микроэлементов. Укрепляет иммунитет и повышает работоспособность.",
        category_id: "cat-bee",
        image: "https://images.unsplash.com/photo-1626383046431-0b6e67c76f84?w=800",
        base_price: 1500.0,
        weight_prices: &[("100гр", 1500.0), ("250гр", 3000.0)],
    },
    ProductFixture {
        name: "Перга пчелиная",
        description: "\"Пчелиный хлеб\" - ферментированная пыльца с уникальным составом. Природный биостимулятор.",
        category_id: "cat-bee",
        image: "https://images.unsplash.com/photo-1558642452-9d2a7deb7f62?w=800",
        base_price: 2500.0,
        weight_prices: &[("100гр", 2500.0), ("250гр", 5500.0)],
    },
    ProductFixture {
        name: "Прополис натуральный",
        description: "Природный антибиотик с мощными антисептическими свойствами. Используется для укрепления иммунитета.",
        category_id: "cat-bee",
        image: "https://images.unsplash.com/photo-1607438375992-eb24e7c21764?w=800",
        base_price: 1200.0,
        weight_prices: &[],
    },
    ProductFixture {
        name: "Маточное молочко",
        description: "Королевское желе - самый ценный продукт пчеловодства. Мощный иммуномодулятор и адаптоген.",
        category_id: "cat-bee",
        image: "https://images.unsplash.com/photo-1587049352846-4a222e784d38?w=800",
        base_price: 8500.0,
        weight_prices: &[],
    },
    ProductFixture {
        name: "Настойка прополиса",
        description: "Спиртовая настойка прополиса для укрепления иммунитета и профилактики простудных заболеваний.",
        category_id: "cat-tincture",
        image: "https://images.unsplash.com/photo-1505253758473-96b7015fcd40?w=800",
        base_price: 2500.0,
        weight_prices: &[("200мл", 2500.0)],
    },
    ProductFixture {
        name: "Настойка подмора",
        description: "Настойка пчелиного подмора - традиционное средство народной медицины.",
        category_id: "cat-tincture",
        image: "https://images.unsplash.com/photo-1505253758473-96b7015fcd40?w=800",
        base_price: 2800.0,
        weight_prices: &[("200мл", 2800.0)],
    },
    ProductFixture {
        name: "Яблочный уксус",
        description: "Натуральный яблочный уксус с мёдом. Полезен для пищеварения и обмена веществ.",
        category_id: "cat-tincture",
        image: "https://images.unsplash.com/photo-1605483351180-fd3b261b5d46?w=800",
        base_price: 1800.0,
        weight_prices: &[("200мл", 1800.0)],
    },
    ProductFixture {
        name: "Настойка 3 в 1",
        description: "Комплексная настойка на основе прополиса, подмора и восковой моли.",
        category_id: "cat-tincture",
        image: "https://images.unsplash.com/photo-1505253758473-96b7015fcd40?w=800",
        base_price: 4500.0,
        weight_prices: &[("200мл", 4500.0)],
    },
    ProductFixture {
        name: "Огнёвка",
        description: "Настойка восковой моли - уникальный продукт для поддержки дыхательной системы.",
        category_id: "cat-tincture",
        image: "https://images.unsplash.com/photo-1505253758473-96b7015fcd40?w=800",
        base_price: 3500.0,
        weight_prices: &[("200мл", 3500.0)],
    },
    ProductFixture {
        name: "Нежные пяточки",
        description: "Крем для ног на основе пчелиного воска. Смягчает и увлажняет кожу стоп.",
        category_id: "cat-cream",
        image: "https://images.unsplash.com/photo-1608248597279-f99d160bfcbc?w=800",
        base_price: 2200.0,
        weight_prices: &[],
    },
    ProductFixture {
        name: "Чудомазь",
        description: "Универсальная мазь с прополисом для заживления и ухода за кожей.",
        category_id: "cat-cream",
        image: "https://images.unsplash.com/photo-1608248597279-f99d160bfcbc?w=800",
        base_price: 3500.0,
        weight_prices: &[],
    },
    ProductFixture {
        name: "Прополисная мазь",
        description: "Лечебная мазь на основе прополиса с антисептическим действием.",
        category_id: "cat-cream",
        image: "https://images.unsplash.com/photo-1608248597279-f99d160bfcbc?w=800",
        base_price: 2800.0,
        weight_prices: &[],
    },
    ProductFixture {
        name: "Свечи восковые",
        description: "Натуральные свечи из пчелиного воска. Горят ровно и долго, очищают воздух.",
        category_id: "cat-candle",
        image: "https://images.unsplash.com/photo-1524614644069-3517282706d8?w=800",
        base_price: 1500.0,
        weight_prices: &[],
    },
    ProductFixture {
        name: "Свечи ароматические",
        description: "Восковые свечи с добавлением натуральных эфирных масел.",
        category_id: "cat-candle",
        image: "https://images.unsplash.com/photo-1524614644069-3517282706d8?w=800",
        base_price: 2000.0,
        weight_prices: &[],
    },
    ProductFixture {
        name: "Деревянная ложка для мёда",
        description: "Традиционная деревянная ложка для мёда ручной работы.",
        category_id: "cat-accessory",
        image: "https://images.unsplash.com/photo-1558642452-9d2a7deb7f62?w=800",
        base_price: 500.0,
        weight_prices: &[],
    },
    ProductFixture {
        name: "Подарочный набор",
        description: "Красивая подарочная упаковка для мёда и пчелопродуктов.",
        category_id: "cat-accessory",
        image: "https://images.unsplash.com/photo-1587049352846-4a222e784d38?w=800",
        base_price: 1000.0,
        weight_prices: &[],
    },
];

impl CategoryFixture {
    /// Seeded categories all start at order 0.
    pub(crate) fn to_record(&self) -> CategoryRecord {
        CategoryRecord {
            id: CategoryId::from_string(self.id),
            name: self.name.to_string(),
            slug: self.slug.to_string(),
            order: 0,
        }
    }
}

impl ProductFixture {
    pub(crate) fn to_record(&self, created_at: Timestamp) -> ProductRecord {
        ProductRecord {
            id: ProductId::new(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            category_id: CategoryId::from_string(self.category_id),
            image: self.image.to_string(),
            base_price: self.base_price,
            weight_prices: self
                .weight_prices
                .iter()
                .map(|&(weight, price)| WeightPrice {
                    weight: weight.to_string(),
                    price,
                })
                .collect(),
            created_at,
        }
    }
}
