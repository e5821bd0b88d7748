mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_list_seeds_defaults_on_first_run() {
    let fixture = TestFixture::new();

    assert_eq!(fixture.list_ids(), vec!["1", "2", "3", "4", "5", "6", "7"]);
    assert!(fixture.data_dir().join("quotes_collection.json").exists());
}

#[test]
fn test_list_plain_shows_authors() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Иммануил Кант"))
        .stdout(predicate::str::contains("Всего цитат: 7"));
}

#[test]
fn test_random_prints_a_default_quote() {
    let fixture = TestFixture::new();
    let quote = fixture.json(&["random"]);

    let ids = fixture.list_ids();
    assert!(ids.contains(&quote["id"].as_str().unwrap().to_string()));
    assert!(!quote["author"].as_str().unwrap().is_empty());
}

#[test]
fn test_add_persists_normalized_quote() {
    let fixture = TestFixture::new();

    let added = fixture.json(&[
        "add",
        "--text",
        "  Познай самого себя ",
        "--author",
        "Сократ",
        "--source",
        "   ",
        "--tag",
        "Мудрость",
        "--tag",
        "мудрость",
    ]);

    let quote = &added["quote"];
    assert_eq!(quote["text"], "Познай самого себя");
    assert!(quote.get("source").is_none());
    assert_eq!(quote["tags"], serde_json::json!(["мудрость"]));
    assert_eq!(added["notifications"][0]["title"], "Цитата добавлена");

    let ids = fixture.list_ids();
    assert_eq!(ids.len(), 8);
    assert_eq!(ids.last().map(String::as_str), quote["id"].as_str());
}

#[test]
fn test_add_without_author_fails_and_writes_nothing() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["add", "--text", "Без автора", "--author", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Автор цитаты обязателен"));

    assert!(!fixture.data_dir().join("quotes_collection.json").exists());
}

#[test]
fn test_delete_existing_quote() {
    let fixture = TestFixture::new();

    let deleted = fixture.json(&["delete", "3"]);
    assert_eq!(deleted["deleted"], true);
    assert_eq!(deleted["notifications"][0]["title"], "Цитата удалена");

    assert_eq!(fixture.list_ids(), vec!["1", "2", "4", "5", "6", "7"]);
}

#[test]
fn test_delete_missing_quote_is_noop() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["delete", "no-such-id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("не найдена"));

    assert_eq!(fixture.list_ids().len(), 7);
}

#[test]
fn test_clear_reseeds_on_next_read() {
    let fixture = TestFixture::new();
    fixture.json(&["delete", "1"]);
    assert_eq!(fixture.list_ids().len(), 6);

    fixture.command().arg("clear").assert().success();
    assert!(!fixture.data_dir().join("quotes_collection.json").exists());

    assert_eq!(fixture.list_ids().len(), 7);
}

#[test]
fn test_corrupt_collection_falls_back_to_defaults() {
    let fixture = TestFixture::new();
    std::fs::write(fixture.data_dir().join("quotes_collection.json"), "{not json").unwrap();

    fixture
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Всего цитат: 7"))
        .stderr(predicate::str::contains("ERROR"));
}

#[test]
fn test_ephemeral_writes_nothing() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--ephemeral", "add", "--text", "t", "--author", "a"])
        .assert()
        .success();

    assert_eq!(std::fs::read_dir(fixture.data_dir()).unwrap().count(), 0);
}

#[test]
fn test_config_key_is_honored() {
    let fixture = TestFixture::new();
    std::fs::write(
        fixture.data_dir().join("config.toml"),
        "[storage]\nkey = \"my_quotes\"\n",
    )
    .unwrap();

    assert_eq!(fixture.list_ids().len(), 7);
    assert!(fixture.data_dir().join("my_quotes.json").exists());
}

#[test]
fn test_help_lists_commands() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("random"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("--ephemeral"));
}
