//! Published SD-JWT interoperability vectors, hashed with SHA-256.

/// Nested credential: verified_claims with evidence, plus top-level claims.
pub const COMPLEX_SD_JWT: &str = concat!(
    "eyJhbGciOiAiRVMyNTYifQ.eyJfc2QiOiBbIi0yeU9mV01lWkZRYXFmWkJoakdmLVRYLXFCTnZrS3hjaUZvaWVkc0k1X",
    "zgiLCAiOGdKWjFDdHFwb0lvbjB2OVpJN0JNR3QxcGJHbUFzTkk4YzA3X3cxT2NTWSIsICJRRGgtSVdORmZHLU5nbEU1W",
    "nNCd2lkNFpTQmpKQlVSWmV5TkprZnRaZ0tnIl0sICJpc3MiOiAiaHR0cHM6Ly9leGFtcGxlLmNvbS9pc3N1ZXIiLCAia",
    "WF0IjogMTY4MzAwMDAwMCwgImV4cCI6IDE4ODMwMDAwMDAsICJ2ZXJpZmllZF9jbGFpbXMiOiB7InZlcmlmaWNhdGlvb",
    "iI6IHsiX3NkIjogWyI3aDRVRTlxU2N2REtvZFhWQ3VvS2ZLQkpwVkJmWE1GX1RtQUdWYVplM1NjIiwgInZUd2UzcmFIS",
    "UZZZ0ZBM3hhVUQyYU14Rno1b0RvOGlCdTA1cUtsT2c5THciXSwgInRydXN0X2ZyYW1ld29yayI6ICJkZV9hbWwiLCAiZ",
    "XZpZGVuY2UiOiBbeyJfc2QiOiBbIjl3cGpWUFd1RDdQSzBuc1FETDhCMDZsbWRnVjNMVnliaEh5ZFFwVE55TEkiLCAiR",
    "zVFbmhPQU9vVTlYXzZRTU52ekZYanBFQV9SYy1BRXRtMWJHX3djYUtJayIsICJJaHdGcldVQjYzUmNacTl5dmdaMFhQY",
    "zdHb3doM08ya3FYZUJJc3dnMUI0IiwgIldweFE0SFNvRXRjVG1DQ0tPZURzbEJfZW11Y1lMejJvTzhvSE5yMWJFVlEiX",
    "X1dfSwgImNsYWltcyI6IHsiX3NkIjogWyJCbGY3REJtZEhFelpNUUh3OHkxMXpDTEFfNzZIZXNaNjBjeGZoQ0ExaE5VI",
    "iwgIkZuTTFZLWVWcVdpLWg2UDl6ekFyYjM1bGZDNDNTalYtWnE5TkpNQXhTSGMiLCAiYzQ2bjBUejRLWTBjNndOZjVkU",
    "TFvVWo0N3MxNmhiOE51Rk1xZW85OF9IMCIsICJoT0l5M1NNaV93TS1TSk93bXYwX3NreWZwaWhkM244anlHWnc1NnppY",
    "3lNIiwgIm0xa3FhQ3dnS3pLbWI5dTQwYm1SMEptM0h2VXVpakUtT0NBdC1nb1FUWDgiLCAieTUwY3pjMElTQ2h5X2JzY",
    "mExZE1vVXVBT1E1QU1tT1NmR29FZTgxdjFGVSJdfX0sICJfc2RfYWxnIjogInNoYS0yNTYiLCAiY25mIjogeyJqd2siO",
    "iB7Imt0eSI6ICJFQyIsICJjcnYiOiAiUC0yNTYiLCAieCI6ICJUQ0FFUjE5WnZ1M09IRjRqNFc0dmZTVm9ISVAxSUxpb",
    "ERsczd2Q2VHZW1jIiwgInkiOiAiWnhqaVdXYlpNUUdIVldLVlE0aGJTSWlyc1ZmdWVjQ0U2dDRqVDlGMkhaUSJ9fX0.m",
    "F1_pvV2a222ALY09Ub1VWAEykb-7FGlonxMka6hQ-YN4dq3r93xYHK0_ut4VdS8n8SUrvOu2GOfQtqaWL71lA~WyIyR0",
    "xDNDJzS1F2ZUNmR2ZyeU5STjl3IiwgInRpbWUiLCAiMjAxMi0wNC0yM1QxODoyNVoiXQ~WyJlbHVWNU9nM2dTTklJOEV",
    "ZbnN4QV9BIiwgInZlcmlmaWNhdGlvbl9wcm9jZXNzIiwgImYyNGM2Zi02ZDNmLTRlYzUtOTczZS1iMGQ4NTA2ZjNiYzc",
    "iXQ~WyI2SWo3dE0tYTVpVlBHYm9TNXRtdlZBIiwgInR5cGUiLCAiZG9jdW1lbnQiXQ~WyJlSThaV205UW5LUHBOUGVOZ",
    "W5IZGhRIiwgIm1ldGhvZCIsICJwaXBwIl0~WyJRZ19PNjR6cUF4ZTQxMmExMDhpcm9BIiwgInRpbWUiLCAiMjAxMi0wN",
    "C0yMlQxMTozMFoiXQ~WyJBSngtMDk1VlBycFR0TjRRTU9xUk9BIiwgImRvY3VtZW50IiwgeyJ0eXBlIjogImlkY2FyZC",
    "IsICJpc3N1ZXIiOiB7Im5hbWUiOiAiU3RhZHQgQXVnc2J1cmciLCAiY291bnRyeSI6ICJERSJ9LCAibnVtYmVyIjogIj",
    "UzNTU0NTU0IiwgImRhdGVfb2ZfaXNzdWFuY2UiOiAiMjAxMC0wMy0yMyIsICJkYXRlX29mX2V4cGlyeSI6ICIyMDIwLT",
    "AzLTIyIn1d~WyJQYzMzSk0yTGNoY1VfbEhnZ3ZfdWZRIiwgImdpdmVuX25hbWUiLCAiTWF4Il0~WyJHMDJOU3JRZmpGW",
    "FE3SW8wOXN5YWpBIiwgImZhbWlseV9uYW1lIiwgIk1cdTAwZmNsbGVyIl0~WyJsa2x4RjVqTVlsR1RQVW92TU5JdkNBI",
    "iwgIm5hdGlvbmFsaXRpZXMiLCBbIkRFIl1d~WyJuUHVvUW5rUkZxM0JJZUFtN0FuWEZBIiwgImJpcnRoZGF0ZSIsICIx",
    "OTU2LTAxLTI4Il0~WyI1YlBzMUlxdVpOYTBoa2FGenp6Wk53IiwgInBsYWNlX29mX2JpcnRoIiwgeyJjb3VudHJ5Ijog",
    "IklTIiwgImxvY2FsaXR5IjogIlx1MDBkZXlra3ZhYlx1MDBlNmphcmtsYXVzdHVyIn1d~WyI1YTJXMF9OcmxFWnpmcW1",
    "rXzdQcS13IiwgImFkZHJlc3MiLCB7ImxvY2FsaXR5IjogIk1heHN0YWR0IiwgInBvc3RhbF9jb2RlIjogIjEyMzQ0Iiw",
    "gImNvdW50cnkiOiAiREUiLCAic3RyZWV0X2FkZHJlc3MiOiAiV2VpZGVuc3RyYVx1MDBkZmUgMjIifV0~WyJ5MXNWVTV",
    "3ZGZKYWhWZGd3UGdTN1JRIiwgImJpcnRoX21pZGRsZV9uYW1lIiwgIlRpbW90aGV1cyJd~WyJIYlE0WDhzclZXM1FEeG",
    "5JSmRxeU9BIiwgInNhbHV0YXRpb24iLCAiRHIuIl0~WyJDOUdTb3VqdmlKcXVFZ1lmb2pDYjFBIiwgIm1zaXNkbiIsIC",
    "I0OTEyMzQ1Njc4OSJd~",
);

/// Array-heavy credential: disclosed array elements, nested arrays, nulls and
/// a recursive array element.
pub const ARRAY_SD_JWT: &str = concat!(
    "eyJhbGciOiAiRVMyNTYifQ.eyJfc2QiOiBbInNHbVYydFNMSG1KU2NFVGV2WGdUUS1iTTdPNVpuUXV1LXlwcUkydkItS",
    "lUiXSwgImlzcyI6ICJodHRwczovL2V4YW1wbGUuY29tL2lzc3VlciIsICJpYXQiOiAxNjgzMDAwMDAwLCAiZXhwIjogM",
    "Tg4MzAwMDAwMCwgInN1YiI6ICJqb2huX2RvZV80MiIsICJuYXRpb25hbGl0aWVzIjogW3siLi4uIjogImk3ZUtkSGNfW",
    "k1PbmhpeXUzVEpqNUdWRFE3WndKT01YRkQzWGdVYm84R1EifSwgeyIuLi4iOiAidXNXWEZQS2FxS01yZVRyajcyUUQyN",
    "HdCOHhjN2xRNHpDbnJubjhaUlZlbyJ9LCAiREUiXSwgImlzX292ZXIiOiB7Il9zZCI6IFsiMm92TUpSX1pOTUI2bmdGS",
    "zNTVVFuUklneU01NDhEelI3dEpGVE8tWnpCTSIsICJDZVZxeFZVVkhwdmE1WHAwWC1OZVV2aGl4akRZcDdQVFo0QmFGV",
    "0dYVWVrIiwgImRnMXBCSlYtZEFCaWxxRDJSWWlHOHo0Z1J0dURGZFJCZGx3SGdkTEZFeDgiXX0sICJhZGRyZXNzZXMiO",
    "iBbeyJzdHJlZXQiOiAiMTIzIE1haW4gU3QiLCAiY2l0eSI6ICJBbnl0b3duIiwgInN0YXRlIjogIk5ZIiwgInppcCI6I",
    "CIxMjM0NSIsICJ0eXBlIjogIm1haW5fYWRkcmVzcyJ9LCB7Ii4uLiI6ICJSTldjeFBEOEExWmhBbTZfd0FpSlNvU3pJU",
    "mJfdzFRVWFLR3ZTMjQwSy1ZIn1dLCAibnVsbF92YWx1ZXMiOiBbbnVsbCwgeyIuLi4iOiAiaGhCNXB6aVM0czBkU3gwa",
    "3FsMzF2RHR1bzNKVkRmQjRWWi1ZSGNqMkE5TSJ9LCB7Ii4uLiI6ICJvX1ZGUmx1QTE5MHdySDVFMXlyMnIzOVV5VG54M",
    "y1tM3FQUkVpa1NyNlFvIn0sIG51bGxdLCAiZGF0YV90eXBlcyI6IFt7Ii4uLiI6ICJuWTcyUDZWNXVIUWUtQllrd1lqL",
    "XBhRzJ5M2ZtajYxNEZLUVFoaGs2VDFFIn0sIHsiLi4uIjogInp0N2tXUHRaVHBNWUtQb2FRZC1MNzFMLWFLWU1ZWU5MT",
    "0ZPZi15SDN1TFkifSwgeyIuLi4iOiAiSzF5eEhKNHoxMEpLZDJqUm1RdXppQ3ltM0Qxb1hCME5hRlZMSEVPdjhYTSJ9L",
    "CB7Ii4uLiI6ICJ5ci0xTkRoQWFGWVB2THJBenZkRmZCd1JKU193bjE5OUpYMGFkRFlhNkFrIn0sIHsiLi4uIjogIk5vV",
    "E9UaldxMV9jWXUza2ZRS2gzaldyeDlPTFNJSWRoWVgwXzkyLVJELVkifSwgeyIuLi4iOiAiYmlCTENQNDI0Q29EWVRwQ",
    "m1kZW4tekdtWU9kRTBHU0hsZXJTYW9ZZVFaMCJ9LCB7Ii4uLiI6ICJfei1XZV9nYnZLbzg0anB1aEJRUzl2OXlWaERvM",
    "i0tRkNETldNSE1lelVRIn1dLCAibmVzdGVkX2FycmF5IjogW1t7Ii4uLiI6ICJGYkpfV19NLUdsOXJNVVI4ZmNzTUZka",
    "UhWLXFFYWJpVC11OWVIdk5LU0FBIn0sIHsiLi4uIjogInpvNm11ekZRSjlVQ2VGdXkzRHFfWUluUXpMR2ltSlZJenRIR",
    "250V1Z4dzAifV0sIFt7Ii4uLiI6ICJuLVRPUUR1cjlFQTJrOUdfVlZxbHZrT1lDeklGYjI4TEtBOTlJYVFmRnQ4In0sI",
    "HsiLi4uIjogInh2SjdOd2hSWTkzVXFoY3FWS0YtQXA3SHdacEtlMXJhRVdaZ19Xb3pCQnMifV1dLCAiYXJyYXlfd2l0a",
    "F9yZWN1cnNpdmVfc2QiOiBbImJvcmluZyIsIHsiLi4uIjogIktJSzlGT1EzQy1qTHhHVzlvUllUTC1BRVRGM2VHb2xQO",
    "Gx5VlJWRk9xWDgifSwgW3siLi4uIjogInVOOERZdFQ2OERvM01BTzlkZVRhZ1daeC1ha2dkNkRtekk0eDl4Rk43YnMif",
    "SwgeyIuLi4iOiAiRjVTVFg2NDUyQXc5VlF5Rmg1dmNsWC1TbFVBdXVfcl9heC1vdzM1ZTRKdyJ9XV0sICJfc2RfYWxnI",
    "jogInNoYS0yNTYiLCAiY25mIjogeyJqd2siOiB7Imt0eSI6ICJFQyIsICJjcnYiOiAiUC0yNTYiLCAieCI6ICJUQ0FFU",
    "jE5WnZ1M09IRjRqNFc0dmZTVm9ISVAxSUxpbERsczd2Q2VHZW1jIiwgInkiOiAiWnhqaVdXYlpNUUdIVldLVlE0aGJTS",
    "Wlyc1ZmdWVjQ0U2dDRqVDlGMkhaUSJ9fX0.AoX_2VJi8MmwPvPNqRIXmMI_HBuuyTa2MbB3tfD2G1FR5kmBnUJI1Itm_",
    "ECD8TwA8v2XjDOUc-L4aywrac7O7Q~WyIyR0xDNDJzS1F2ZUNmR2ZyeU5STjl3IiwgIlVTIl0~WyJlbHVWNU9nM2dTTk",
    "lJOEVZbnN4QV9BIiwgIkNBIl0~WyI2SWo3dE0tYTVpVlBHYm9TNXRtdlZBIiwgIjEzIiwgdHJ1ZV0~WyJlSThaV205UW",
    "5LUHBOUGVOZW5IZGhRIiwgIjE4IiwgZmFsc2Vd~WyJRZ19PNjR6cUF4ZTQxMmExMDhpcm9BIiwgIjIxIiwgZmFsc2Vd~",
    "WyJBSngtMDk1VlBycFR0TjRRTU9xUk9BIiwgeyJzdHJlZXQiOiAiNDU2IE1haW4gU3QiLCAiY2l0eSI6ICJBbnl0b3du",
    "IiwgInN0YXRlIjogIk5ZIiwgInppcCI6ICIxMjM0NSIsICJ0eXBlIjogInNlY29uZGFyeV9hZGRyZXNzIn1d~WyJQYzM",
    "zSk0yTGNoY1VfbEhnZ3ZfdWZRIiwgbnVsbF0~WyJHMDJOU3JRZmpGWFE3SW8wOXN5YWpBIiwgbnVsbF0~WyJsa2x4RjV",
    "qTVlsR1RQVW92TU5JdkNBIiwgbnVsbF0~WyJuUHVvUW5rUkZxM0JJZUFtN0FuWEZBIiwgNDJd~WyI1YlBzMUlxdVpOYT",
    "Boa2FGenp6Wk53IiwgMy4xNF0~WyI1YTJXMF9OcmxFWnpmcW1rXzdQcS13IiwgImZvbyJd~WyJ5MXNWVTV3ZGZKYWhWZ",
    "Gd3UGdTN1JRIiwgdHJ1ZV0~WyJIYlE0WDhzclZXM1FEeG5JSmRxeU9BIiwgWyJUZXN0Il1d~WyJDOUdTb3VqdmlKcXVF",
    "Z1lmb2pDYjFBIiwgeyJmb28iOiAiYmFyIn1d~WyJreDVrRjE3Vi14MEptd1V4OXZndnR3IiwgImZvbyJd~WyJIM28xdX",
    "N3UDc2MEZpMnllR2RWQ0VRIiwgImJhciJd~WyJPQktsVFZsdkxnLUFkd3FZR2JQOFpBIiwgImJheiJd~WyJNMEpiNTd0",
    "NDF1YnJrU3V5ckRUM3hBIiwgInF1eCJd~WyJEc210S05ncFY0ZEFIcGpyY2Fvc0F3IiwgImJheiIsIHsicXV4IjogInF",
    "1dXgifV0~WyJlSzVvNXBIZmd1cFBwbHRqMXFoQUp3IiwgeyJfc2QiOiBbIjZaU1pWRFg0VGVMNXlwbGthN1JJdDF3X1Z",
    "fQkEyZWJJMDQxQUVvZC1JQUkiXSwgImZvbyI6ICJiYXIifV0~WyJqN0FEZGIwVVZiMExpMGNpUGNQMGV3IiwgImZvbyJ",
    "d~WyJXcHhKckZ1WDh1U2kycDRodDA5anZ3IiwgImJhciJd~WyJhdFNtRkFDWU1iSlZLRDA1bzNKZ3RRIiwgInNkX2Fyc",
    "mF5IiwgWzMyLCAyM11d~",
);

/// Split a compact SD-JWT into its decoded payload and disclosure strings.
pub fn payload_and_disclosures(compact: &str) -> (serde_json::Value, Vec<String>) {
    let mut segments = compact.split('~');
    let jwt = segments.next().expect("issuer JWT");
    let disclosures = segments
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    let payload = jwt.split('.').nth(1).expect("payload segment");
    let bytes = sdjwt_core::encoding::b64url_decode(payload).expect("payload base64url");
    let payload = serde_json::from_slice(&bytes).expect("payload JSON");
    (payload, disclosures)
}
