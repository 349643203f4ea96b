use typed_outcome::{ Classified, Error, Result };

#[test]
fn fail_is_fail() {
	let result = Result::<u32>::fail_empty();
	assert!( result.is_fail() );
	assert!( !result.is_success() );
}

#[test]
fn fail_missing_error_is_empty() {
	assert!( Result::<u32>::fail( None::<Error> ).error().is_empty() );
	assert!( Result::<u32>::fail_empty().error().is_empty() );
}

#[test]
fn fail_keeps_given_error() {
	let error = Error::standard( "error" );
	let result = Result::<String>::fail( error.clone() );
	assert_eq!( result.error(), &error );
	assert_eq!( result.try_error(), Some( &error ));
}

#[test]
fn fail_has_no_value() {
	let result = Result::<u32>::fail( Error::standard( "error" ));
	assert!( result.try_value().is_none() );
	assert_no_value!( result.value() );
	assert_no_value!( Result::<Option<u32>>::fail_empty().value() );
	assert_no_value!( Result::<u32>::fail_empty().into_value() );
}
