//! Static catalog data.
//!
//! The storefront serves a fixed in-memory catalog; there is no catalog
//! persistence or admin surface. Items and stores are built once and shared.

use rust_decimal::Decimal;
use std::sync::OnceLock;

use super::models::{Category, CatalogItem, CompatibleVehicle, ItemType, Store, SubCategory};

static PRODUCTS: OnceLock<Vec<CatalogItem>> = OnceLock::new();
static SERVICES: OnceLock<Vec<CatalogItem>> = OnceLock::new();
static STORES: OnceLock<Vec<Store>> = OnceLock::new();
static CATEGORIES: OnceLock<Vec<Category>> = OnceLock::new();

pub fn products() -> &'static [CatalogItem] {
    PRODUCTS.get_or_init(build_products)
}

pub fn services() -> &'static [CatalogItem] {
    SERVICES.get_or_init(build_services)
}

pub fn stores() -> &'static [Store] {
    STORES.get_or_init(build_stores)
}

pub fn categories() -> &'static [Category] {
    CATEGORIES.get_or_init(build_categories)
}

/// Look up a listing by id in the list matching its type
pub fn find_item(id: &str, item_type: ItemType) -> Option<&'static CatalogItem> {
    let items = match item_type {
        ItemType::Product => products(),
        ItemType::Service => services(),
    };
    items.iter().find(|item| item.id == id)
}

pub fn find_store(id: &str) -> Option<&'static Store> {
    stores().iter().find(|store| store.id == id)
}

/// Distinct wilayas covered by the stores, sorted
pub fn wilayas() -> Vec<String> {
    let mut wilayas: Vec<String> = stores().iter().map(|s| s.wilaya.clone()).collect();
    wilayas.sort();
    wilayas.dedup();
    wilayas
}

fn fitment(
    brand: &str,
    model: Option<&str>,
    years: Option<&[u16]>,
    engine: Option<&str>,
) -> CompatibleVehicle {
    CompatibleVehicle {
        brand: brand.to_string(),
        model: model.map(str::to_string),
        years: years.map(<[u16]>::to_vec),
        engine: engine.map(str::to_string),
    }
}

fn item(
    id: &str,
    name: &str,
    store: &str,
    location: &str,
    wilaya: &str,
    price: u32,
    description: &str,
    main_category: &str,
    sub_category: &str,
    reviews: f32,
    store_address: &str,
    compatible_vehicles: Vec<CompatibleVehicle>,
) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        store: store.to_string(),
        location: location.to_string(),
        wilaya: wilaya.to_string(),
        price: Decimal::from(price),
        description: description.to_string(),
        main_category: main_category.to_string(),
        sub_category: sub_category.to_string(),
        reviews,
        store_address: store_address.to_string(),
        compatible_vehicles,
    }
}

fn build_products() -> Vec<CatalogItem> {
    vec![
        item(
            "p1",
            "Premium Ceramic Brake Pads (Front)",
            "AutoParts Algiers",
            "Algiers",
            "Algiers",
            5200,
            "High-performance ceramic front brake pads. Quiet, smooth, and durable.",
            "Mechanical",
            "Brake Systems",
            4.7,
            "12 Rue Didouche Mourad, Alger Centre, Algiers",
            vec![
                fitment("Toyota", Some("Corolla"), Some(&[2018]), Some("1.6L Petrol")),
                fitment("Hyundai", Some("Elantra"), Some(&[2017, 2018]), Some("1.6L Petrol")),
            ],
        ),
        item(
            "p2",
            "Full Synthetic Engine Oil 5W-30 (5L)",
            "Oran Car Lube",
            "Oran",
            "Oran",
            3800,
            "Top-grade 5W-30 fully synthetic engine oil for modern engines. API SN Plus.",
            "Consumables & Fluids",
            "Oils & Lubricants",
            4.9,
            "5 Avenue de la République, Oran",
            vec![],
        ),
        item(
            "p3",
            "Activated Carbon Cabin Air Filter",
            "AutoParts Algiers",
            "Algiers",
            "Algiers",
            1500,
            "Premium cabin air filter with activated carbon for superior odor filtration.",
            "Consumables & Fluids",
            "Filters (Air, Oil, Cabin)",
            4.3,
            "12 Rue Didouche Mourad, Alger Centre, Algiers",
            vec![
                fitment("Toyota", Some("Corolla"), Some(&[2018, 2019, 2020]), None),
                fitment("Hyundai", Some("Accent"), None, None),
            ],
        ),
        item(
            "p4",
            "Heavy Duty Car Battery 12V 70Ah",
            "Annaba Power Solutions",
            "Annaba",
            "Annaba",
            8500,
            "Reliable 12V 70Ah car battery with 3-year warranty. Maintenance-free.",
            "Electronic & Electrical",
            "Batteries & Charging",
            4.8,
            "Rue de la Revolution, Annaba",
            vec![],
        ),
        item(
            "p5",
            "Engine Air Filter - Performance",
            "Sétif Speed Shop",
            "Sétif",
            "Sétif",
            1900,
            "High-flow performance engine air filter for increased horsepower and acceleration.",
            "Consumables & Fluids",
            "Filters (Air, Oil, Cabin)",
            4.5,
            "Avenue de l'ALN, Sétif",
            vec![fitment(
                "Volkswagen",
                Some("Golf"),
                Some(&[2019, 2020, 2021, 2022]),
                Some("2.0L GTI"),
            )],
        ),
        item(
            "p6",
            "Bosch Wiper Blade Set (Aerotwin)",
            "Oran Car Lube",
            "Oran",
            "Oran",
            2800,
            "Bosch Aerotwin flat wiper blades for streak-free visibility. Various sizes.",
            "Exterior & Body",
            "Wipers & Washers",
            4.7,
            "5 Avenue de la République, Oran",
            vec![],
        ),
        item(
            "p7",
            "Michelin Primacy 4 Tire - 205/55 R16",
            "TirePro Oran",
            "Oran",
            "Oran",
            12500,
            "Michelin Primacy 4 tire for excellent wet braking and longevity. Size 205/55 R16.",
            "Consumables & Fluids",
            "Tires & Wheels",
            4.8,
            "Boulevard Millenium, Bir El Djir, Oran",
            vec![
                fitment("Toyota", Some("Corolla"), Some(&[2018]), Some("1.6L Petrol")),
                fitment(
                    "Volkswagen",
                    Some("Golf"),
                    Some(&[2015, 2016, 2017, 2018]),
                    Some("1.4L TSI"),
                ),
            ],
        ),
        item(
            "p8",
            "Android Auto/CarPlay Touchscreen Head Unit",
            "Sétif Speed Shop",
            "Sétif",
            "Sétif",
            18000,
            "7-inch universal double DIN touchscreen with Android Auto and Apple CarPlay.",
            "Interior Components",
            "Infotainment & Audio",
            4.5,
            "Avenue de l'ALN, Sétif",
            vec![],
        ),
    ]
}

fn build_services() -> Vec<CatalogItem> {
    vec![
        item(
            "s1",
            "Premium Car Wash & Wax",
            "CleanCar Algiers",
            "Algiers",
            "Algiers",
            2000,
            "Exterior hand wash, liquid wax application, tire shining, and interior vacuuming.",
            "Maintenance & Inspection",
            "Detailing & Car Wash",
            4.5,
            "Zone Industrielle Oued Smar, Algiers",
            vec![],
        ),
        item(
            "s2",
            "Advanced OBD-II Engine Diagnostics",
            "MechTech Blida",
            "Blida",
            "Blida",
            3500,
            "Full system scan using latest OBD-II tools to pinpoint engine and electronic issues.",
            "Mechanical Services",
            "Engine Repair & Diagnostics",
            4.3,
            "Route Nationale 1, Blida",
            vec![
                fitment("Toyota", Some("Corolla"), Some(&[2018]), Some("1.6L Petrol")),
                fitment("Renault", Some("Clio"), Some(&[2015]), Some("1.5L Diesel")),
                fitment("Hyundai", Some("Accent"), None, None),
            ],
        ),
        item(
            "s3",
            "Synthetic Oil Change Package",
            "Garage Moderne Constantine",
            "Constantine",
            "Constantine",
            5000,
            "Includes up to 5L of premium synthetic oil, new oil filter, and labor.",
            "Mechanical Services",
            "Oil & Fluid Changes",
            4.7,
            "Cité Boussouf, Constantine",
            vec![],
        ),
        item(
            "s4",
            "ECU Performance Tuning Stage 1",
            "Sétif Speed Shop",
            "Sétif",
            "Sétif",
            25000,
            "Optimize your engine's performance with our Stage 1 ECU remap. Model specific.",
            "Custom & Specialized",
            "Performance Tuning",
            4.9,
            "Avenue de l'ALN, Sétif",
            vec![fitment(
                "Volkswagen",
                Some("Golf"),
                Some(&[2019, 2020, 2021, 2022]),
                Some("2.0L GTI"),
            )],
        ),
    ]
}

fn build_stores() -> Vec<Store> {
    fn store(
        id: &str,
        name: &str,
        location: &str,
        wilaya: &str,
        store_type: &str,
        address: &str,
        rating: f32,
    ) -> Store {
        Store {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            wilaya: wilaya.to_string(),
            store_type: store_type.to_string(),
            address: address.to_string(),
            rating,
        }
    }

    vec![
        store(
            "st1",
            "AutoParts Algiers",
            "Algiers",
            "Algiers",
            "Parts Retailer",
            "12 Rue Didouche Mourad, Alger Centre, Algiers",
            4.7,
        ),
        store(
            "st2",
            "Oran Car Lube",
            "Oran",
            "Oran",
            "Parts & Fluids Store",
            "5 Avenue de la République, Oran",
            4.8,
        ),
        store(
            "st3",
            "CleanCar Algiers",
            "Algiers",
            "Algiers",
            "Detailing Center",
            "Zone Industrielle Oued Smar, Algiers",
            4.5,
        ),
        store(
            "st4",
            "MechTech Blida",
            "Blida",
            "Blida",
            "Full Service Garage",
            "Route Nationale 1, Blida",
            4.3,
        ),
        store(
            "st5",
            "Sétif Speed Shop",
            "Sétif",
            "Sétif",
            "Performance & Tuning Center",
            "Avenue de l'ALN, Sétif",
            4.7,
        ),
        store(
            "st6",
            "TirePro Oran",
            "Oran",
            "Oran",
            "Tire & Wheel Center",
            "Boulevard Millenium, Bir El Djir, Oran",
            4.6,
        ),
        store(
            "st7",
            "Annaba Power Solutions",
            "Annaba",
            "Annaba",
            "Battery & Electrical Specialist",
            "Rue de la Revolution, Annaba",
            4.8,
        ),
        store(
            "st8",
            "Garage Moderne Constantine",
            "Constantine",
            "Constantine",
            "Service & Repair Shop",
            "Cité Boussouf, Constantine",
            4.6,
        ),
    ]
}

fn build_categories() -> Vec<Category> {
    fn category(id: &str, name: &str, item_type: ItemType, subs: &[(&str, &str)]) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            item_type,
            sub_categories: subs
                .iter()
                .map(|(sub_id, sub_name)| SubCategory {
                    id: sub_id.to_string(),
                    name: sub_name.to_string(),
                })
                .collect(),
        }
    }

    vec![
        category(
            "cat_prod_mech",
            "Mechanical",
            ItemType::Product,
            &[
                ("cat_prod_mech_engine", "Engine Components"),
                ("cat_prod_mech_susp", "Suspension & Steering"),
                ("cat_prod_mech_brakes", "Brake Systems"),
                ("cat_prod_mech_exhaust", "Exhaust Systems"),
            ],
        ),
        category(
            "cat_prod_elec",
            "Electronic & Electrical",
            ItemType::Product,
            &[
                ("cat_prod_elec_sensors", "Sensors & Switches"),
                ("cat_prod_elec_ignition", "Ignition Systems"),
                ("cat_prod_elec_battery", "Batteries & Charging"),
                ("cat_prod_elec_lighting", "Lighting Components"),
            ],
        ),
        category(
            "cat_prod_ext",
            "Exterior & Body",
            ItemType::Product,
            &[
                ("cat_prod_ext_panels", "Body Panels"),
                ("cat_prod_ext_mirrors", "Mirrors & Components"),
                ("cat_prod_ext_wipers", "Wipers & Washers"),
            ],
        ),
        category(
            "cat_prod_int",
            "Interior Components",
            ItemType::Product,
            &[
                ("cat_prod_int_dash", "Dashboard Parts"),
                ("cat_prod_int_infotain", "Infotainment & Audio"),
            ],
        ),
        category(
            "cat_prod_consum",
            "Consumables & Fluids",
            ItemType::Product,
            &[
                ("cat_prod_consum_oil", "Oils & Lubricants"),
                ("cat_prod_consum_filters", "Filters (Air, Oil, Cabin)"),
                ("cat_prod_consum_tires", "Tires & Wheels"),
            ],
        ),
        category(
            "cat_serv_mech",
            "Mechanical Services",
            ItemType::Service,
            &[
                ("cat_serv_mech_eng_repair", "Engine Repair & Diagnostics"),
                ("cat_serv_mech_brake_serv", "Brake System Service"),
                ("cat_serv_mech_oil_change", "Oil & Fluid Changes"),
                ("cat_serv_mech_tire_serv", "Tire Mounting & Balancing"),
            ],
        ),
        category(
            "cat_serv_maint",
            "Maintenance & Inspection",
            ItemType::Service,
            &[
                ("cat_serv_maint_checkup", "Scheduled Maintenance"),
                ("cat_serv_maint_detailing", "Detailing & Car Wash"),
            ],
        ),
        category(
            "cat_serv_custom",
            "Custom & Specialized",
            ItemType::Service,
            &[
                ("cat_serv_custom_tuning", "Performance Tuning"),
                ("cat_serv_custom_tinting", "Window Tinting"),
            ],
        ),
    ]
}
