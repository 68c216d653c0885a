use message_insight::core::patterns::STOPWORDS;
use message_insight::{
    distinct_words, extract_coordinates, load, search_messages, top_words, Dataset, WordCount,
};

const SAMPLE: &str = "Telefono;Mensaje;Fecha
600111222;Hola, nos vemos en la plaza;2024-01-01
600333444;\"La reunión es en -33.4489; -70.6693 mañana\";2024-01-02
600111222;Llevo el mapa y la brújula, plaza central;2024-01-02
600555666
600333444;HOLA hola Hola;2024-01-03
600111222;\"puntos 10.5;20.25 y 30.1 40.2\";2024-01-04
";

fn sample() -> Dataset {
    load(SAMPLE.as_bytes()).unwrap()
}

/// 搜尋結果都包含關鍵字，且未被選中的記錄都不包含
#[test]
fn test_search_matches_exactly_the_containing_records() {
    let dataset = sample();

    for needle in ["hola", "PLAZA", "ñ", "es en", "zzz", ""] {
        let found = search_messages(&dataset, needle);
        let lowered = needle.to_lowercase();

        for record in &found {
            assert!(record.message().unwrap().to_lowercase().contains(&lowered));
        }

        let excluded = dataset
            .records()
            .iter()
            .filter(|r| !found.contains(r))
            .filter_map(|r| r.message());
        for message in excluded {
            assert!(!message.to_lowercase().contains(&lowered), "{needle:?} missed {message:?}");
        }
    }
}

#[test]
fn test_search_preserves_row_order() {
    let dataset = sample();
    let found = search_messages(&dataset, "");
    let positions: Vec<usize> = found
        .iter()
        .map(|r| dataset.records().iter().position(|d| d == r).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    // 缺少 Mensaje 的列不會出現
    assert_eq!(found.len(), 5);
}

#[test]
fn test_top_words_lists_are_bounded_sorted_and_stopword_free() {
    let dataset = sample();

    for limit in [1, 2, 3, 10] {
        let result = top_words(&dataset, limit);
        assert!(!result.is_empty());

        for words in result.values() {
            assert!(!words.is_empty());
            assert!(words.len() <= limit);
            assert!(words.windows(2).all(|w| w[0].count >= w[1].count));
            assert!(words.iter().all(|w| !STOPWORDS.contains(&w.word.as_str())));
        }
    }
}

#[test]
fn test_top_words_per_identifier_counts() {
    let result = top_words(&sample(), 10);

    assert_eq!(result["600333444"][0], WordCount::new("hola", 3));
    assert_eq!(result["600111222"][0], WordCount::new("plaza", 2));
    assert!(!result.contains_key("600555666"));
}

#[test]
fn test_round_trip_single_row() {
    let dataset = load(b"Telefono;Mensaje\n555;Hola el mundo mundo\n").unwrap();
    let result = top_words(&dataset, 10);

    assert_eq!(result.len(), 1);
    let words = &result["555"];
    assert_eq!(words[0], WordCount::new("mundo", 2));
    assert_eq!(words[1], WordCount::new("hola", 1));
    assert!(words.iter().all(|w| w.word != "el"));
}

#[test]
fn test_coordinates_in_dataset_then_text_order() {
    let found = extract_coordinates(&sample());
    let pairs: Vec<(&str, &str, &str)> = found
        .iter()
        .map(|m| (m.identifier.as_str(), m.latitude.as_str(), m.longitude.as_str()))
        .collect();

    assert_eq!(
        pairs,
        vec![
            ("600333444", "-33.4489", "-70.6693"),
            ("600111222", "10.5", "20.25"),
            ("600111222", "30.1", "40.2"),
        ]
    );
}

#[test]
fn test_header_only_upload_yields_empty_results() {
    let dataset = load(b"Telefono;Mensaje\n").unwrap();

    for needle in ["", "hola"] {
        assert!(search_messages(&dataset, needle).is_empty());
    }
    assert!(top_words(&dataset, 10).is_empty());
    assert!(distinct_words(&dataset, 10).is_empty());
    assert!(extract_coordinates(&dataset).is_empty());
}

#[test]
fn test_records_without_message_column_are_ignored() {
    let dataset = load(b"Telefono;Nota\n1;hola 1.5;2.5\n").unwrap();

    assert_eq!(dataset.len(), 1);
    assert!(search_messages(&dataset, "").is_empty());
    assert!(top_words(&dataset, 10).is_empty());
    assert!(extract_coordinates(&dataset).is_empty());
}

#[test]
fn test_loading_same_bytes_twice_is_idempotent() {
    let first = load(SAMPLE.as_bytes()).unwrap();
    let second = load(SAMPLE.as_bytes()).unwrap();

    assert_eq!(first, second);
    assert_eq!(search_messages(&first, "plaza"), search_messages(&second, "plaza"));
    assert_eq!(top_words(&first, 10), top_words(&second, 10));
    assert_eq!(extract_coordinates(&first), extract_coordinates(&second));
}
