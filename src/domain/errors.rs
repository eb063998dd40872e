use custom_error::custom_error;

custom_error! {
///! Custom error for request bodies or configured values that cannot be used.
pub MalformedInput
    MissingEmail = "Email is required",
    MissingInterviewDetails = "Business idea and interview setting are required",
    InvalidEmail{email:String} = "Invalid email: {email}",
}
