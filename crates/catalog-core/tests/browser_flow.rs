//! Browser Flow Tests
//!
//! Startup, search and navigation driven end to end against a recording
//! presenter and stub image hydrators.

use async_trait::async_trait;
use catalog_core::{
    Catalog, CatalogBrowser, CatalogConfig, CatalogError, HydrationOutcome, ImageHydrator,
    PageFrame, Presenter, VehicleRecord, ViewStatus, DEFAULT_PAGE_SIZE,
};

#[derive(Default)]
struct Recorder {
    frames: Vec<PageFrame>,
}

impl Presenter for Recorder {
    fn present(&mut self, frame: PageFrame) {
        self.frames.push(frame);
    }
}

struct AlwaysFails;

#[async_trait(?Send)]
impl ImageHydrator for AlwaysFails {
    async fn hydrate(&self, _records: &mut Vec<VehicleRecord>) -> catalog_core::Result<()> {
        Err(CatalogError::Hydration("hydrateCarImages rejected".to_string()))
    }
}

struct AlwaysSucceeds;

#[async_trait(?Send)]
impl ImageHydrator for AlwaysSucceeds {
    async fn hydrate(&self, records: &mut Vec<VehicleRecord>) -> catalog_core::Result<()> {
        for record in records.iter_mut() {
            record.image = format!("resolved/{}", record.image);
        }
        Ok(())
    }
}

fn car(make: &str, model: &str, image: &str) -> VehicleRecord {
    VehicleRecord {
        make: make.to_string(),
        model: model.to_string(),
        image: image.to_string(),
        ..Default::default()
    }
}

fn thirteen_cars() -> Catalog {
    let mut records = vec![
        car("Honda", "Civic", "civic.jpg"),
        car("Honda", "Accord", "accord.jpg"),
    ];
    for i in 0..11 {
        records.push(car("Toyota", &format!("Corolla {}", i), "corolla.jpg"));
    }
    Catalog::new(records)
}

fn browser() -> CatalogBrowser<Recorder> {
    CatalogBrowser::new(&CatalogConfig::default(), Recorder::default()).unwrap()
}

#[tokio::test]
async fn test_failed_hydration_still_renders_original_images() {
    let mut catalog = thirteen_cars();
    let outcome = catalog.hydrate(Some(&AlwaysFails)).await;
    assert!(matches!(outcome, HydrationOutcome::Failed(_)));

    let mut browser = browser();
    browser.load(catalog);

    let frames = &browser.presenter().frames;
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].items[0].image, "civic.jpg");
    assert_eq!(frames[0].status, ViewStatus::Ready);
}

#[tokio::test]
async fn test_successful_hydration_is_visible_in_first_frame() {
    let mut catalog = thirteen_cars();
    assert_eq!(catalog.hydrate(Some(&AlwaysSucceeds)).await, HydrationOutcome::Hydrated);

    let mut browser = browser();
    browser.load(catalog);
    assert_eq!(browser.presenter().frames[0].items[0].image, "resolved/civic.jpg");
}

#[test]
fn test_pages_of_thirteen() {
    let mut browser = browser();
    browser.load(thirteen_cars());
    assert!(browser.next_page());
    assert!(browser.next_page());

    let sizes: Vec<usize> = browser.presenter().frames.iter().map(|f| f.items.len()).collect();
    assert_eq!(sizes, vec![6, 6, 1]);
    assert!(browser.presenter().frames.iter().all(|f| f.total_pages == 3));
}

#[test]
fn test_boundary_navigation_emits_nothing() {
    let mut browser = browser();
    browser.load(thirteen_cars());
    assert!(!browser.prev_page());
    assert_eq!(browser.presenter().frames.len(), 1);

    browser.next_page();
    browser.next_page();
    assert!(!browser.next_page());
    assert_eq!(browser.presenter().frames.len(), 3);
    assert_eq!(browser.state().current_page(), 3);
}

#[test]
fn test_search_resets_page_and_emits_once() {
    let mut browser = browser();
    browser.load(thirteen_cars());
    browser.next_page();

    browser.search("CIVIC");
    let frames = &browser.presenter().frames;
    assert_eq!(frames.len(), 3);
    let last = frames.last().unwrap();
    assert_eq!(last.current_page, 1);
    assert_eq!(last.total_pages, 1);
    assert_eq!(last.items, vec![car("Honda", "Civic", "civic.jpg")]);
}

#[test]
fn test_desktop_and_mobile_terms_converge() {
    let mut desktop = browser();
    let mut mobile = browser();
    desktop.load(thirteen_cars());
    mobile.load(thirteen_cars());

    desktop.search("honda");
    mobile.search("HONDA");
    assert_eq!(desktop.presenter().frames.last(), mobile.presenter().frames.last());
}

#[test]
fn test_no_results_then_clear() {
    let mut browser = browser();
    browser.load(thirteen_cars());

    browser.search("ferrari");
    let frame = browser.presenter().frames.last().unwrap().clone();
    assert_eq!(frame.status, ViewStatus::NoResults);
    assert!(frame.items.is_empty());
    assert_eq!(frame.total_pages, 1);

    browser.search("");
    let frame = browser.presenter().frames.last().unwrap();
    assert_eq!(frame.status, ViewStatus::Ready);
    assert_eq!(frame.total_pages, 3);
}

#[test]
fn test_missing_catalog_frame() {
    let mut browser = browser();
    browser.load(Catalog::default());

    let frame = &browser.presenter().frames[0];
    assert_eq!(frame.status, ViewStatus::MissingCatalog);
    assert_eq!(frame.total_pages, 1);
    assert!(!browser.next_page());
}

#[test]
fn test_show_details_does_not_render() {
    let mut browser = browser();
    browser.load(thirteen_cars());

    let detail = browser.show_details(1).unwrap();
    assert_eq!(detail.model, "Accord");
    assert_eq!(detail.drive, "-");
    assert_eq!(browser.presenter().frames.len(), 1);
}

#[test]
fn test_custom_page_size() {
    let config = CatalogConfig {
        page_size: 5,
        ..Default::default()
    };
    let mut browser = CatalogBrowser::new(&config, Recorder::default()).unwrap();
    browser.load(thirteen_cars());
    assert_eq!(browser.presenter().frames[0].total_pages, 3);
    assert!(browser.next_page());
    assert!(browser.next_page());
    assert_eq!(browser.presenter().frames.last().unwrap().items.len(), 3);
}

#[test]
fn test_zero_page_size_is_rejected() {
    let config = CatalogConfig {
        page_size: 0,
        ..Default::default()
    };
    let result = CatalogBrowser::new(&config, Recorder::default());
    assert!(matches!(result, Err(CatalogError::Config(_))));
}

#[test]
fn test_default_page_size_browser() {
    let mut browser = CatalogBrowser::with_page_size(DEFAULT_PAGE_SIZE, Recorder::default());
    browser.load(thirteen_cars());
    assert_eq!(browser.presenter().frames[0].items.len(), 6);
    assert_eq!(browser.presenter().frames[0].total_pages, 3);
}
