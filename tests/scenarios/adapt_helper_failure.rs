use pipe_trait::Pipe ;
use typed_outcome::{ Classified, Fail, Outcome, Result };

#[derive( Debug )]
struct User { name: String }

fn check_input( input: &str ) -> Outcome {
	match input.trim().is_empty() {
		true => Outcome::fail_message( "bad input" ),
		false => Outcome::success().clone(),
	}
}

fn validate( input: &str ) -> Option<Fail> {
	match check_input( input ) {
		Outcome::Success => None,
		Outcome::Fail( fail ) => Some( fail ),
	}
}

fn load_user( input: &str ) -> Result<User> {
	match validate( input ) {
		Some( fail ) => fail.adapt(),
		None => Result::success( User { name: input.trim().to_string() }),
	}
}

#[test]
fn scenario_adapt_helper_failure() {
	let r = check_input( " " ).adapt::<User>()
		.expect( "a failure always adapts" );
	assert!( r.is_fail() );
	assert_eq!( r.error().message().as_deref(), Some( "bad input" ));
}

#[test]
fn scenario_adapt_helper_failure_through_option() {
	let r = validate( "" ).pipe( Result::<User>::adapt );
	assert!( r.is_fail() );
	assert_eq!( r.error().message().as_deref(), Some( "bad input" ));

	let r = load_user( "" );
	assert_eq!( r.error().message().as_deref(), Some( "bad input" ));
	assert_eq!( load_user( " ada " ).value().name, "ada" );
}
