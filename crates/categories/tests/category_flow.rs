//! End-to-end flows: use case → service → repository → event sink.

use std::sync::Arc;

use assistance_categories::{
    ActiveFilter, CatalogConfig, Category, CategoryError, CategoryRepository, CategoryService,
    CreateCategoryInput, CreateCategoryUseCase, FindCategoryInput, FindCategoryUseCase,
    InMemoryCategoryRepository,
};
use assistance_core::UuidIdGenerator;
use assistance_events::InMemoryEventSink;

type Service = CategoryService<Arc<InMemoryCategoryRepository>>;

fn wiring() -> (Arc<InMemoryCategoryRepository>, Arc<Service>, Arc<InMemoryEventSink>) {
    let repo = Arc::new(InMemoryCategoryRepository::new());
    let service = Arc::new(CategoryService::new(repo.clone()));
    let sink = Arc::new(InMemoryEventSink::new());
    (repo, service, sink)
}

fn create_input(name: &str, assistance_type: &str) -> CreateCategoryInput {
    CreateCategoryInput {
        name: name.to_string(),
        assistance_type: assistance_type.to_string(),
        stock_group: None,
    }
}

/// Create categories through the use case, bind suppliers, deactivate one,
/// and list what is left.
#[test]
fn create_update_and_list_roundtrip() {
    let (repo, service, sink) = wiring();
    let config = CatalogConfig::from_lookup(|_| None).expect("default config");
    let create = CreateCategoryUseCase::new(service.clone(), sink.clone(), UuidIdGenerator::new(), config);
    let find = FindCategoryUseCase::new(service.clone());

    let food_id = create.execute(create_input("Food", "sale")).expect("create food");
    let rent_id = create.execute(create_input("Rent", "subsidized")).expect("create rent");
    assert_ne!(food_id, rent_id);
    assert_eq!(sink.sent().len(), 2);
    assert_eq!(repo.len(), 2);

    let mut food = service.get_by_id(food_id.as_str()).unwrap().expect("food stored");
    food.add_supplier("001756").unwrap();
    food.add_supplier("001757").unwrap();
    food.add_supplier("001756").unwrap();
    service.update(&food).expect("update food");

    let mut rent = service.get_by_id(rent_id.as_str()).unwrap().expect("rent stored");
    rent.inactivate();
    service.update(&rent).expect("update rent");

    let all = find.execute(FindCategoryInput::default()).unwrap();
    assert_eq!(all.len(), 2);

    let active = find.execute(FindCategoryInput { active: Some(true) }).unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].name, "Food");
    assert_eq!(active[0].supplier_total, 2);
}

#[test]
fn duplicate_names_are_rejected_across_the_flow() {
    let (_repo, service, sink) = wiring();
    let create = CreateCategoryUseCase::new(
        service.clone(),
        sink.clone(),
        UuidIdGenerator::new(),
        CatalogConfig::default(),
    );

    create.execute(create_input("Food", "sale")).unwrap();
    let err = create.execute(create_input("Food", "paid")).unwrap_err();
    assert_eq!(err, CategoryError::DuplicateCategoryName);
    assert_eq!(sink.sent().len(), 1);

    let other_id = create.execute(create_input("Transport", "paid")).unwrap();
    let mut other = service.get_by_id(other_id.as_str()).unwrap().unwrap();
    other.change_name("Food").unwrap();
    assert_eq!(
        service.update(&other).unwrap_err(),
        CategoryError::DuplicateCategoryName
    );
}

/// Subcategory changes travel with the parent through the repository.
#[test]
fn subcategory_state_is_persisted_with_parent() {
    let (repo, service, _sink) = wiring();

    let mut parent = Category::new("Health", "subsidized", "1901", Some("health".into())).unwrap();
    let dental = Category::new("Dental", "paid", "3000", Some("dental".into())).unwrap();
    let vision = Category::new("Vision", "paid", "3000", Some("vision".into())).unwrap();
    parent.add_subcategory(&dental).unwrap();
    parent.add_subcategory(&vision).unwrap();
    service.create(&parent).unwrap();

    let mut stored = repo.find("health").unwrap().unwrap();
    stored.change_subcategory_stock_group("dental", "1234").unwrap();
    stored.inactivate_subcategory("vision").unwrap();
    service.update(&stored).unwrap();

    let reloaded = service.get_by_id("health").unwrap().unwrap();
    assert!(reloaded.is_active());
    assert_eq!(reloaded.stock_group(), "1901");

    let dental = reloaded.get_subcategory("dental").unwrap().unwrap();
    assert_eq!(dental.stock_group(), "1234");
    assert!(dental.is_active());

    let vision = reloaded.get_subcategory("vision").unwrap().unwrap();
    assert_eq!(vision.stock_group(), "1901");
    assert!(!vision.is_active());

    assert_eq!(reloaded.subcategories(ActiveFilter::with_active(true)).len(), 1);

    let mut reloaded = reloaded;
    reloaded.inactivate();
    service.update(&reloaded).unwrap();

    assert!(service.get_all(ActiveFilter::with_active(true)).unwrap().is_empty());
    let inactive = service.get_by_id("health").unwrap().unwrap();
    assert!(inactive.subcategories(ActiveFilter::with_active(true)).is_empty());
}
