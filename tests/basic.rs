use sensidice::{
    place::{concat, product, Place},
    types::err::{ConvertError, ErrorKind, PlaceError},
};

mod basic {
    use super::*;

    #[test]
    fn decimal() {
        let decimal = Place::leaf("0123456789");

        assert_eq!(decimal.convert(0), Ok(vec!['0']));
        assert_eq!(decimal.convert(9), Ok(vec!['9']));
        assert_eq!(decimal.convert(10), Ok(vec!['1', '0']));
        assert_eq!(decimal.convert(2024), Ok(vec!['2', '0', '2', '4']));
    }

    #[test]
    fn mixed_alphabet() {
        let place = concat(
            Place::leaf("01"),
            product(Place::leaf("ab"), Place::leaf("AB")).unwrap(),
        )
        .unwrap();

        assert_eq!(place.convert(0), Ok(vec!['0']));
        assert_eq!(place.convert(1), Ok(vec!['1']));
        assert_eq!(place.convert(2), Ok(vec!['a', 'A']));
        assert_eq!(place.convert(5), Ok(vec!['b', 'B']));
        assert_eq!(place.convert(6), Ok(vec!['1', '0']));
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Token {
        Number(u8),
        Text(&'static str),
    }

    #[test]
    fn triple_product() {
        let numbers = Place::leaf([Token::Number(0), Token::Number(1)]);
        let lower = Place::leaf([Token::Text("a"), Token::Text("b")]);
        let upper = Place::leaf([Token::Text("A"), Token::Text("B")]);

        let place = product(product(numbers, lower).unwrap(), upper).unwrap();

        assert_eq!(
            place.convert(0),
            Ok(vec![Token::Number(0), Token::Text("a"), Token::Text("A")])
        );
        assert_eq!(
            place.convert(7),
            Ok(vec![Token::Number(1), Token::Text("b"), Token::Text("B")])
        );
        assert_eq!(
            place.convert(8),
            Ok(vec![
                Token::Number(0),
                Token::Text("a"),
                Token::Text("B"),
                Token::Number(0),
                Token::Text("a"),
                Token::Text("A"),
            ])
        );
    }

    #[test]
    fn heterogeneous_sources() {
        let words = Place::leaf(vec!["one".to_string(), "two".to_string()]);
        let letters = Place::leaf(['x', 'y', 'z'].map(String::from));

        let place = concat(words, letters).unwrap();

        assert_eq!(place.base(), 5);
        assert_eq!(place.digit(1), Ok(vec!["two".to_string()]));
        assert_eq!(place.digit(4), Ok(vec!["z".to_string()]));
    }

    #[test]
    fn dice() {
        let die = Place::leaf(1..7_u8);
        let two_dice = product(die.clone(), die).unwrap();

        assert_eq!(two_dice.base(), 36);
        assert_eq!(two_dice.convert(0), Ok(vec![1, 1]));
        assert_eq!(two_dice.convert(35), Ok(vec![6, 6]));
        assert_eq!(two_dice.convert(36), Ok(vec![1, 2, 1, 1]));
    }

    #[test]
    fn failures() {
        let place = concat(Place::leaf("01"), Place::leaf("ab")).unwrap();

        assert_eq!(
            place.digit(4),
            Err(ErrorKind::Place(PlaceError::OutOfRange { index: 4, base: 4 }))
        );
        assert_eq!(
            place.convert(-4),
            Err(ErrorKind::Convert(ConvertError::NegativeNumber))
        );

        let empty: Place<char> = Place::leaf("");
        assert_eq!(empty.base(), 0);
        assert_eq!(empty.convert(0), Err(ErrorKind::Place(PlaceError::Degenerate)));
    }
}
