/// Id of the synthetic add-ons section appended after the data-provided
/// sections. It participates in navigation like any other section.
pub const ADDITIONS_ID: &str = "additions";

/// One orderable item. Items with several prices render as a small grid,
/// one column per size; `labels` captions those columns when the section's
/// shared subtitles do not apply.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub name: &'static str,
    pub prices: Vec<u32>,
    pub labels: Option<Vec<&'static str>>,
    pub popular: bool,
}

impl MenuItem {
    pub fn new(name: &'static str, prices: &[u32]) -> Self {
        Self {
            name,
            prices: prices.to_vec(),
            labels: None,
            popular: false,
        }
    }

    pub fn labeled(name: &'static str, prices: &[u32], labels: &[&'static str]) -> Self {
        Self {
            name,
            prices: prices.to_vec(),
            labels: Some(labels.to_vec()),
            popular: false,
        }
    }

    pub fn popular(mut self) -> Self {
        self.popular = true;
        self
    }
}

/// One labeled group of menu content with a stable id, displayed in page
/// order. The id list is fixed for the lifetime of the page.
#[derive(Debug, Clone)]
pub struct MenuSection {
    pub id: &'static str,
    pub title: &'static str,
    pub emoji: &'static str,
    /// Shared price-column captions for the whole section, if any.
    pub subtitles: Vec<&'static str>,
    pub items: Vec<MenuItem>,
}

/// Flat add-on line item.
#[derive(Debug, Clone)]
pub struct Addition {
    pub name: &'static str,
    pub price: u32,
}

impl Addition {
    fn new(name: &'static str, price: u32) -> Self {
        Self { name, price }
    }
}

/// The whole card: restaurant identity, ordered sections and the add-on
/// groups. Read-only at runtime.
#[derive(Debug, Clone)]
pub struct Menu {
    pub name: &'static str,
    pub tagline: &'static str,
    pub address: &'static str,
    pub phones: Vec<&'static str>,
    /// WhatsApp number in international form, digits only.
    pub whatsapp: &'static str,
    pub credit: &'static str,
    pub delivery_note: &'static str,
    pub sections: Vec<MenuSection>,
    pub additions_general: Vec<Addition>,
    pub additions_protein: Vec<Addition>,
}

impl Menu {
    /// Ordered navigable ids: every data section plus the trailing
    /// synthetic add-ons section.
    pub fn section_ids(&self) -> Vec<String> {
        self.sections
            .iter()
            .map(|section| section.id.to_string())
            .chain(std::iter::once(ADDITIONS_ID.to_string()))
            .collect()
    }

    pub fn section(&self, id: &str) -> Option<&MenuSection> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn whatsapp_link(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp)
    }

    pub fn tel_link(phone: &str) -> String {
        format!("tel:{}", phone)
    }

    pub fn maps_link(&self) -> String {
        let query = format!("{} {}", self.name, self.address).replace(' ', "+");
        format!("https://www.google.com/maps/search/{}", query)
    }

    /// The built-in Hot Mix card.
    pub fn hot_mix() -> Self {
        Self {
            name: "HOT MIX",
            tagline: "Order once and you'll order from us every time",
            address: "El Badrasheen - behind the city center, next to the education directorate",
            phones: vec!["01126770105", "01094280173", "01220691771"],
            whatsapp: "201126770105",
            credit: "Design and build: Eng. Ahmed El Nakib",
            delivery_note: "Delivery available to all areas",
            sections: vec![
                MenuSection {
                    id: "shawarma",
                    title: "Shawarma",
                    emoji: "🌯",
                    subtitles: vec!["Regular", "Large"],
                    items: vec![
                        MenuItem::new("Chicken Shawarma", &[55, 75]).popular(),
                        MenuItem::new("Beef Shawarma", &[65, 90]),
                        MenuItem::new("Mixed Shawarma", &[70, 95]),
                        MenuItem::new("Shawarma Plate with Rice", &[110]),
                        MenuItem::new("Saudi Shawarma with Garlic Dip", &[60, 85]).popular(),
                    ],
                },
                MenuSection {
                    id: "crepes",
                    title: "Crepes",
                    emoji: "🥙",
                    subtitles: vec!["Regular", "Large"],
                    items: vec![
                        MenuItem::new("Chicken Crepe", &[60, 80]),
                        MenuItem::new("Pane Crepe", &[60, 80]).popular(),
                        MenuItem::new("Sausage Crepe", &[50, 70]),
                        MenuItem::new("Hot Mix Crepe", &[85, 110]).popular(),
                        MenuItem::new("Cheese Crepe", &[40, 55]),
                    ],
                },
                MenuSection {
                    id: "sandwiches",
                    title: "Sandwiches",
                    emoji: "🥪",
                    subtitles: vec![],
                    items: vec![
                        MenuItem::new("Fried Chicken Pane Sandwich", &[45]),
                        MenuItem::new("Liver Sandwich", &[30]),
                        MenuItem::new("Sausage Sandwich", &[35]),
                        MenuItem::new("Hawawshi", &[50]).popular(),
                        MenuItem::new("Grilled Kofta Sandwich", &[45]),
                        MenuItem::new("Fries Sandwich", &[20]),
                    ],
                },
                MenuSection {
                    id: "grills",
                    title: "Grills",
                    emoji: "🍗",
                    subtitles: vec![],
                    items: vec![
                        MenuItem::new("Half Grilled Chicken with Rice", &[140]).popular(),
                        MenuItem::new("Whole Grilled Chicken", &[250]),
                        MenuItem::new("Kofta Plate (1/2 kg)", &[220]),
                        MenuItem::new("Grilled Wings (12 pcs)", &[120]),
                    ],
                },
                MenuSection {
                    id: "pizza",
                    title: "Pizza",
                    emoji: "🍕",
                    subtitles: vec!["Small", "Medium", "Large"],
                    items: vec![
                        MenuItem::new("Margherita", &[60, 80, 100]),
                        MenuItem::new("Chicken Shawarma Pizza", &[85, 110, 140]).popular(),
                        MenuItem::new("Mixed Meats Pizza", &[95, 125, 155]),
                        MenuItem::new("Vegetables Pizza", &[55, 75, 95]),
                    ],
                },
                MenuSection {
                    id: "boxes",
                    title: "Family Boxes",
                    emoji: "📦",
                    subtitles: vec![],
                    items: vec![
                        MenuItem::new("Hot Mix Box (feeds 2)", &[220]).popular(),
                        MenuItem::new("Big Mix Box (feeds 4)", &[400]).popular(),
                        MenuItem::labeled("Crispy Box", &[180, 330], &["8 pcs", "16 pcs"]),
                    ],
                },
                MenuSection {
                    id: "drinks",
                    title: "Drinks & Desserts",
                    emoji: "🥤",
                    subtitles: vec![],
                    items: vec![
                        MenuItem::new("Soda Can", &[20]),
                        MenuItem::new("Mineral Water", &[10]),
                        MenuItem::new("Fresh Mango Juice", &[35]),
                        MenuItem::labeled("Rice Pudding", &[25, 35], &["Plain", "Nuts"]),
                    ],
                },
            ],
            additions_general: vec![
                Addition::new("Extra Cheese", 10),
                Addition::new("Fries Add-on", 15),
                Addition::new("Garlic Dip", 5),
                Addition::new("Tahini", 5),
                Addition::new("Extra Bread", 3),
                Addition::new("Coleslaw", 10),
            ],
            additions_protein: vec![
                Addition::new("Extra Shawarma", 25),
                Addition::new("Extra Pane", 20),
                Addition::new("Extra Sausage", 15),
                Addition::new("Extra Kofta", 25),
            ],
        }
    }
}
