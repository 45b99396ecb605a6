use book_inventory::{Book, BookChanges, BookDraft, Inventory, Locale, ValidationError};

fn draft(title: &str, author: &str, year: &str, genre: &str, isbn: &str) -> BookDraft {
    BookDraft {
        title: title.into(),
        author: author.into(),
        year: year.into(),
        genre: genre.into(),
        isbn: isbn.into(),
    }
}

#[test]
fn add_update_find_remove_export_session() {
    let mut inventory = Inventory::new();
    inventory.add(draft("Dune", "Herbert", "1965", "Sci-Fi", "111").into_book().unwrap());
    inventory.add(draft("1984", "Orwell", "1949", "Dystopia", "222").into_book().unwrap());

    let listing = inventory.list(Locale::Spanish);
    let dune_at = listing.find("Libro 1:\nTítulo: Dune").expect("Dune listed first");
    let orwell_at = listing.find("Libro 2:\nTítulo: 1984").expect("1984 listed second");
    assert!(dune_at < orwell_at);

    assert!(inventory.update(
        "111",
        BookChanges::new("Dune (rev)", "Herbert", 1965, "Sci-Fi")
    ));
    assert_eq!(
        inventory.find("dune (rev)"),
        Some(&Book::new("Dune (rev)", "Herbert", 1965, "Sci-Fi", "111"))
    );

    assert_eq!(inventory.remove("222"), 1);
    let listing = inventory.list(Locale::Spanish);
    assert!(listing.contains("Libro 1:\nTítulo: Dune (rev)"));
    assert!(!listing.contains("Libro 2:"));
    assert!(!listing.contains("1984"));

    let csv = inventory.export_csv(Locale::Spanish).unwrap();
    assert_eq!(
        csv,
        "Título,Autor,Año,Género,ISBN\nDune (rev),Herbert,1965,Sci-Fi,111\n"
    );
}

#[test]
fn malformed_input_never_reaches_the_inventory() {
    let inventory = Inventory::new();
    let rejected = draft("Dune", "Herbert", "MCMLXV", "Sci-Fi", "111").into_book();
    assert_eq!(rejected, Err(ValidationError::InvalidYear("MCMLXV".into())));
    assert!(inventory.is_empty());
    assert_eq!(inventory.list(Locale::Spanish), "No hay libros en el inventario.");
}

#[test]
fn duplicate_isbns_resolve_by_position() {
    let mut inventory = Inventory::new();
    inventory.add(Book::new("First", "A", 2001, "G", "dup"));
    inventory.add(Book::new("Other", "B", 2002, "G", "solo"));
    inventory.add(Book::new("Second", "C", 2003, "G", "dup"));

    assert!(inventory.update("dup", BookChanges::new("First (rev)", "A", 2001, "G")));
    assert_eq!(inventory.books()[2].title, "Second");

    assert_eq!(inventory.remove("dup"), 2);
    assert_eq!(inventory.books(), &[Book::new("Other", "B", 2002, "G", "solo")]);
}
