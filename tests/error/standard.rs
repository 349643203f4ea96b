use typed_outcome::Error ;

#[test]
fn standard_error_message_is_verbatim() {
	let text = "  disk full\n\twhile writing ünïcödé  ";
	let error = Error::standard( text );
	assert_eq!( error.message().as_deref(), Some( text ));
	assert!( matches!( error, Error::Standard( Some( ref stored )) if stored == text ));
}

#[test]
fn standard_error_keeps_empty_text() {
	assert_eq!( Error::standard( "" ).message().as_deref(), Some( "" ));
}

#[test]
fn standard_error_without_text_has_no_message() {
	assert_eq!( Error::Standard( None ).message(), None );
	assert!( !Error::Standard( None ).is_empty() );
}
