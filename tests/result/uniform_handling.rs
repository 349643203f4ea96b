use typed_outcome::{ Classified, Error, Outcome, Result };

fn describe( result: &dyn Classified ) -> String {
	match result.try_error() {
		None => "ok".to_string(),
		Some( error ) => error.message().map_or_else(|| "unknown".to_string(), | message | message.into_owned() ),
	}
}

#[test]
fn results_of_any_payload_are_handled_uniformly() {
	let results: Vec<Box<dyn Classified>> = vec![
		Box::new( Outcome::Success ),
		Box::new( Outcome::fail_message( "plain" )),
		Box::new( Result::success( 1_u8 )),
		Box::new( Result::<String>::fail( Error::standard( "typed" ))),
		Box::new( Result::<()>::fail_empty() ),
	];
	let descriptions = results.iter().map(| result | describe( &**result )).collect::<Vec<_>>();
	assert_eq!( descriptions, [ "ok", "plain", "ok", "typed", "unknown" ]);
}

#[test]
fn typed_result_upcasts_to_outcome() {
	assert_eq!( Result::success( "payload" ).into_outcome(), Outcome::Success );
	let outcome = Result::<u8>::fail( Error::standard( "typed" )).into_outcome();
	assert_eq!( outcome.error().message().as_deref(), Some( "typed" ));
}

#[test]
fn typed_result_converts_to_std_result() {
	fn parse( input: &str ) -> std::result::Result<u32, Error> {
		let result = match input.parse::<u32>() {
			Ok( value ) => Result::success( value ),
			Err( error ) => Result::fail( Error::caught( error )),
		};
		let value = std::result::Result::<u32, Error>::from( result )?;
		Ok( value * 2 )
	}

	assert_eq!( parse( "21" ), Ok( 42 ));
	let error = parse( "x" ).expect_err( "not a number" );
	assert!( error.exception().is_some_and(| exception | exception.is::<std::num::ParseIntError>() ));
}

#[test]
fn std_result_converts_to_typed_result() {
	let result: Result<u8> = std::result::Result::<u8, Error>::Ok( 5 ).into();
	assert_eq!( result.value(), &5 );
	let result: Result<u8> = std::result::Result::<u8, Error>::Err( Error::Empty ).into();
	assert!( result.error().is_empty() );
}
