use rand::{rngs::StdRng, Rng, SeedableRng};
use sensidice::{
    place::{concat, product, Base, Place},
    types::err::{ErrorKind, PlaceError},
};

/// A place together with every digit of the place, written out in full.
struct Written {
    place: Place<u32>,
    digits: Vec<Vec<u32>>,
}

fn random_written(rng: &mut StdRng, depth: usize, fresh: &mut u32) -> Written {
    if depth == 0 || rng.random_bool(0.3) {
        let length = rng.random_range(0..5);
        let symbols = (0..length)
            .map(|_| {
                *fresh += 1;
                *fresh
            })
            .collect::<Vec<u32>>();

        return Written {
            digits: symbols.iter().map(|s| vec![*s]).collect(),
            place: Place::leaf(symbols),
        };
    }

    let a = random_written(rng, depth - 1, fresh);
    let b = random_written(rng, depth - 1, fresh);

    match rng.random_bool(0.5) {
        true => {
            let mut digits = a.digits.clone();
            digits.extend(b.digits.iter().cloned());
            Written {
                place: concat(a.place, b.place).unwrap(),
                digits,
            }
        }

        false => {
            let mut digits = Vec::default();
            for left in &a.digits {
                for right in &b.digits {
                    let mut pair = left.clone();
                    pair.extend(right.iter().cloned());
                    digits.push(pair);
                }
            }
            Written {
                place: product(a.place, b.place).unwrap(),
                digits,
            }
        }
    }
}

fn seeded() -> StdRng {
    let _ = env_logger::builder().is_test(true).try_init();
    StdRng::seed_from_u64(0x5e45_1d1c_e)
}

mod properties {
    use super::*;

    #[test]
    fn digits_match_written_digits() {
        let mut rng = seeded();

        for _ in 0..200 {
            let mut fresh = 0;
            let written = random_written(&mut rng, 3, &mut fresh);
            let base = written.place.base();

            assert_eq!(base, written.digits.len() as Base);

            for (index, digit) in written.digits.iter().enumerate() {
                assert_eq!(written.place.digit(index as Base).as_ref(), Ok(digit));
            }

            let expected = match &written.place {
                Place::Product(product) if product.right().base() == 0 => PlaceError::Degenerate,
                _ => PlaceError::OutOfRange { index: base, base },
            };
            assert_eq!(written.place.digit(base), Err(ErrorKind::Place(expected)));
        }
    }

    #[test]
    fn bases_add_and_multiply() {
        let mut rng = seeded();

        for _ in 0..200 {
            let mut fresh = 0;
            let a = random_written(&mut rng, 2, &mut fresh).place;
            let b = random_written(&mut rng, 2, &mut fresh).place;

            let (a_base, b_base) = (a.base(), b.base());

            assert_eq!(concat(a.clone(), b.clone()).unwrap().base(), a_base + b_base);
            assert_eq!(product(a, b).unwrap().base(), a_base * b_base);
        }
    }

    #[test]
    fn concatenation_offsets() {
        let mut rng = seeded();

        for _ in 0..100 {
            let mut fresh = 0;
            let a = random_written(&mut rng, 2, &mut fresh).place;
            let b = random_written(&mut rng, 2, &mut fresh).place;
            let ab = concat(a.clone(), b.clone()).unwrap();

            for index in 0..a.base() {
                assert_eq!(ab.digit(index), a.digit(index));
            }
            for index in 0..b.base() {
                assert_eq!(ab.digit(a.base() + index), b.digit(index));
            }
            assert!(ab.digit(a.base() + b.base()).is_err());
        }
    }

    #[test]
    fn product_pairs() {
        let mut rng = seeded();

        for _ in 0..100 {
            let mut fresh = 0;
            let a = random_written(&mut rng, 2, &mut fresh).place;
            let b = random_written(&mut rng, 2, &mut fresh).place;
            let ab = product(a.clone(), b.clone()).unwrap();

            for index in 0..ab.base() {
                let mut pair = a.digit(index / b.base()).unwrap();
                pair.extend(b.digit(index % b.base()).unwrap());
                assert_eq!(ab.digit(index), Ok(pair));
            }
        }
    }

    #[test]
    fn conversion_is_positional() {
        let mut rng = seeded();
        let mut checked = 0;

        while checked < 200 {
            let mut fresh = 0;
            let written = random_written(&mut rng, 3, &mut fresh);
            let base = written.place.base();
            if base < 2 {
                continue;
            }
            checked += 1;

            let number: Base = rng.random_range(0..base.pow(3));
            let indices = written.place.indices(number).unwrap();

            let value = indices
                .iter()
                .fold(0, |value: Base, index| value * base + index);
            assert_eq!(value, number);
            assert!(indices.iter().all(|index| *index < base));
            assert!(indices.len() == 1 || indices[0] != 0);

            let expected = indices
                .iter()
                .flat_map(|index| written.digits[*index as usize].iter().cloned())
                .collect::<Vec<u32>>();
            assert_eq!(written.place.convert(number), Ok(expected));
        }
    }

    #[test]
    fn conversion_below_base_is_a_digit() {
        let mut rng = seeded();

        for _ in 0..100 {
            let mut fresh = 0;
            let written = random_written(&mut rng, 3, &mut fresh);

            for number in 0..written.place.base() {
                assert_eq!(written.place.convert(number), written.place.digit(number));
            }
        }
    }
}
