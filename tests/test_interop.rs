use biased::either::either::{left, right, Either};

#[test]
fn converts_from_option() {
    let present: Either<(), i32> = Some(3).into();
    let empty: Either<(), i32> = None.into();

    assert_eq!(present, right(3));
    assert_eq!(empty, left(()));
}

#[test]
fn converts_from_result() {
    let ok: Result<i32, String> = Ok(1);
    let err: Result<i32, String> = Err("boom".to_string());

    assert_eq!(Either::from(ok), right(1));
    assert_eq!(Either::from(err), left("boom".to_string()));
}

#[test]
fn converts_into_result() {
    let r: Either<String, i32> = right(1);
    let l: Either<String, i32> = left("boom".to_string());

    assert_eq!(r.into_result(), Ok(1));
    assert_eq!(Result::from(l), Err("boom".to_string()));
}

#[test]
fn result_round_trip_keeps_sides() {
    let parsed: Either<std::num::ParseIntError, i32> = "12".parse::<i32>().into();

    assert_eq!(parsed.right(), Ok(&12));
    assert!(Either::from("twelve".parse::<i32>()).is_left());
}

#[test]
fn converts_with_the_either_crate() {
    let theirs: either::Either<&str, i32> = either::Either::Right(5);

    let ours: Either<&str, i32> = theirs.into();
    assert_eq!(ours, right(5));

    let back: either::Either<&str, i32> = left("l").into();
    assert_eq!(back, either::Either::Left("l"));
}

#[cfg(feature = "serde")]
#[test]
fn serializes_with_variant_tag() {
    let r: Either<String, i32> = right(7);
    let l: Either<String, i32> = left("no".to_string());

    assert_eq!(serde_json::to_string(&r).unwrap(), r#"{"Right":7}"#);
    assert_eq!(serde_json::to_string(&l).unwrap(), r#"{"Left":"no"}"#);

    let decoded: Either<String, i32> = serde_json::from_str(r#"{"Left":"no"}"#).unwrap();
    assert_eq!(decoded, l);
}
