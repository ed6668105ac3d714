use savenus_core::types::{Category, Food, Name, Price, Wallet};
use savenus_core::{
    Command, CommandError, FoodComparator, FoodFilter, Menu, Model,
    SortCommand, SortSpecError, SortSpecification,
};

fn food(name: &str, price: &str, category: &str) -> Food {
    Food::new(
        Name::new(name).unwrap(),
        Price::new(price).unwrap(),
        Category::new(category).unwrap(),
    )
}

fn typical_model() -> Model {
    let menu = Menu::from_foods(
        vec![
            food("Chicken Rice", "4.00", "Meal"),
            food("Kopi", "1.20", "Drink"),
            food("Laksa", "5.50", "Meal"),
            food("Teh Tarik", "1.20", "Drink"),
            food("Kaya Toast", "2.00", "Snack"),
        ],
        Wallet::default(),
    )
    .unwrap();
    Model::new(menu)
}

fn displayed(model: &Model) -> Vec<String> {
    model
        .displayed_foods()
        .into_iter()
        .map(|f| f.name().to_string())
        .collect()
}

#[test]
fn sort_command_reorders_display() {
    let mut model = typical_model();

    let result = SortCommand::new(["CATEGORY", "ASC", "PRICE", "DESC"])
        .execute(&mut model)
        .unwrap();

    assert_eq!(result.feedback(), SortCommand::MESSAGE_SUCCESS);
    assert_eq!(
        displayed(&model),
        ["Kopi", "Teh Tarik", "Laksa", "Chicken Rice", "Kaya Toast"]
    );
}

#[test]
fn price_then_name_descending_tiebreak() {
    let menu = Menu::from_foods(
        vec![
            food("B", "5", "Meal"),
            food("A", "5", "Meal"),
            food("Z", "3", "Meal"),
        ],
        Wallet::default(),
    )
    .unwrap();
    let mut model = Model::new(menu);

    SortCommand::new(["PRICE", "ASC", "NAME", "DESC"])
        .execute(&mut model)
        .unwrap();

    assert_eq!(displayed(&model), ["Z", "B", "A"]);
}

#[test]
fn failed_sort_leaves_model_unchanged() {
    let mut model = typical_model();
    SortCommand::new(["NAME", "DESC"]).execute(&mut model).unwrap();
    let before = displayed(&model);
    let ordering_before = model.ordering().cloned();

    let err = SortCommand::new(["PRICE", "ASC", "PRICE", "DESC"])
        .execute(&mut model)
        .unwrap_err();

    assert_eq!(
        err,
        CommandError::InvalidSort {
            message: SortCommand::DUPLICATE_FIELD_USAGE,
            source: SortSpecError::DuplicateField(
                savenus_core::SortField::Price
            ),
        }
    );
    assert_eq!(displayed(&model), before);
    assert_eq!(model.ordering().cloned(), ordering_before);
}

#[test]
fn empty_sort_reports_usage() {
    let mut model = typical_model();
    let err = SortCommand::new(Vec::<String>::new())
        .execute(&mut model)
        .unwrap_err();
    assert_eq!(err.to_string(), SortCommand::NO_ARGUMENTS_USAGE);
    assert!(model.ordering().is_none());
}

#[test]
fn repeated_sorts_are_independent_and_idempotent() {
    let mut model = typical_model();
    let by_price = SortCommand::new(["PRICE", "ASC"]);
    let by_name = SortCommand::new(["NAME", "ASC"]);

    by_price.execute(&mut model).unwrap();
    let first = displayed(&model);
    by_name.execute(&mut model).unwrap();
    by_price.execute(&mut model).unwrap();

    assert_eq!(displayed(&model), first);
    // Kopi and Teh Tarik tie on price and keep their menu order.
    assert_eq!(
        first,
        ["Kopi", "Teh Tarik", "Kaya Toast", "Chicken Rice", "Laksa"]
    );
}

#[test]
fn sort_never_mutates_menu_storage() {
    let mut model = typical_model();
    let stored_before = model.menu().foods().to_vec();

    SortCommand::new(["PRICE", "DESC"]).execute(&mut model).unwrap();

    assert_eq!(model.menu().foods(), stored_before.as_slice());
}

#[test]
fn sort_applies_to_filtered_view() {
    let mut model = typical_model();
    model.update_filter(FoodFilter::keywords(["rice", "laksa"]));

    SortCommand::new(["PRICE", "DESC"]).execute(&mut model).unwrap();

    assert_eq!(displayed(&model), ["Laksa", "Chicken Rice"]);
}

#[test]
fn comparator_can_be_used_directly_on_owned_lists() {
    let foods = typical_model().menu().foods().to_vec();
    let spec: SortSpecification = "PRICE DESC".parse().unwrap();

    let sorted = FoodComparator::new(spec).sorted(&foods);

    assert_eq!(sorted[0].name().as_str(), "Laksa");
    assert_eq!(sorted.len(), foods.len());
}
