//! Dialing regions offered by the lookup client
//!
//! The table is informational: neither the client nor the gateway rejects a
//! code that is missing from it.

/// A selectable dialing region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// ISO 3166-1 alpha-2 code, as sent in `countryCode`
    pub code: &'static str,
    /// Display name
    pub name: &'static str,
}

const fn region(code: &'static str, name: &'static str) -> Region {
    Region { code, name }
}

/// All regions, in the order the client lists them
pub fn regions() -> &'static [Region] {
    &REGIONS
}

/// Look up a region by code (case-insensitive)
pub fn find_region(code: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.code.eq_ignore_ascii_case(code))
}

static REGIONS: [Region; 249] = [
    region("AF", "Afghanistan"),
    region("AX", "Åland Islands"),
    region("AL", "Albania"),
    region("DZ", "Algeria"),
    region("AS", "American Samoa"),
    region("AD", "Andorra"),
    region("AO", "Angola"),
    region("AI", "Anguilla"),
    region("AQ", "Antarctica"),
    region("AG", "Antigua and Barbuda"),
    region("AR", "Argentina"),
    region("AM", "Armenia"),
    region("AW", "Aruba"),
    region("AU", "Australia"),
    region("AT", "Austria"),
    region("AZ", "Azerbaijan"),
    region("BS", "Bahamas"),
    region("BH", "Bahrain"),
    region("BD", "Bangladesh"),
    region("BB", "Barbados"),
    region("BY", "Belarus"),
    region("BE", "Belgium"),
    region("BZ", "Belize"),
    region("BJ", "Benin"),
    region("BM", "Bermuda"),
    region("BT", "Bhutan"),
    region("BO", "Bolivia"),
    region("BQ", "Bonaire, Sint Eustatius and Saba"),
    region("BA", "Bosnia and Herzegovina"),
    region("BW", "Botswana"),
    region("BV", "Bouvet Island"),
    region("BR", "Brazil"),
    region("IO", "British Indian Ocean Territory"),
    region("BN", "Brunei Darussalam"),
    region("BG", "Bulgaria"),
    region("BF", "Burkina Faso"),
    region("BI", "Burundi"),
    region("CV", "Cabo Verde"),
    region("KH", "Cambodia"),
    region("CM", "Cameroon"),
    region("CA", "Canada"),
    region("KY", "Cayman Islands"),
    region("CF", "Central African Republic"),
    region("TD", "Chad"),
    region("CL", "Chile"),
    region("CN", "China"),
    region("CX", "Christmas Island"),
    region("CC", "Cocos (Keeling) Islands"),
    region("CO", "Colombia"),
    region("KM", "Comoros"),
    region("CG", "Congo"),
    region("CD", "Congo, Democratic Republic of the"),
    region("CK", "Cook Islands"),
    region("CR", "Costa Rica"),
    region("CI", "Côte d'Ivoire"),
    region("HR", "Croatia"),
    region("CU", "Cuba"),
    region("CW", "Curaçao"),
    region("CY", "Cyprus"),
    region("CZ", "Czechia"),
    region("DK", "Denmark"),
    region("DJ", "Djibouti"),
    region("DM", "Dominica"),
    region("DO", "Dominican Republic"),
    region("EC", "Ecuador"),
    region("EG", "Egypt"),
    region("SV", "El Salvador"),
    region("GQ", "Equatorial Guinea"),
    region("ER", "Eritrea"),
    region("EE", "Estonia"),
    region("SZ", "Eswatini"),
    region("ET", "Ethiopia"),
    region("FK", "Falkland Islands (Malvinas)"),
    region("FO", "Faroe Islands"),
    region("FJ", "Fiji"),
    region("FI", "Finland"),
    region("FR", "France"),
    region("GF", "French Guiana"),
    region("PF", "French Polynesia"),
    region("TF", "French Southern Territories"),
    region("GA", "Gabon"),
    region("GM", "Gambia"),
    region("GE", "Georgia"),
    region("DE", "Germany"),
    region("GH", "Ghana"),
    region("GI", "Gibraltar"),
    region("GR", "Greece"),
    region("GL", "Greenland"),
    region("GD", "Grenada"),
    region("GP", "Guadeloupe"),
    region("GU", "Guam"),
    region("GT", "Guatemala"),
    region("GG", "Guernsey"),
    region("GN", "Guinea"),
    region("GW", "Guinea-Bissau"),
    region("GY", "Guyana"),
    region("HT", "Haiti"),
    region("HM", "Heard Island and McDonald Islands"),
    region("VA", "Holy See"),
    region("HN", "Honduras"),
    region("HK", "Hong Kong"),
    region("HU", "Hungary"),
    region("IS", "Iceland"),
    region("IN", "India"),
    region("ID", "Indonesia"),
    region("IR", "Iran"),
    region("IQ", "Iraq"),
    region("IE", "Ireland"),
    region("IM", "Isle of Man"),
    region("IL", "Israel"),
    region("IT", "Italy"),
    region("JM", "Jamaica"),
    region("JP", "Japan"),
    region("JE", "Jersey"),
    region("JO", "Jordan"),
    region("KZ", "Kazakhstan"),
    region("KE", "Kenya"),
    region("KI", "Kiribati"),
    region("KP", "Korea, Democratic People's Republic of"),
    region("KR", "Korea, Republic of"),
    region("KW", "Kuwait"),
    region("KG", "Kyrgyzstan"),
    region("LA", "Lao People's Democratic Republic"),
    region("LV", "Latvia"),
    region("LB", "Lebanon"),
    region("LS", "Lesotho"),
    region("LR", "Liberia"),
    region("LY", "Libya"),
    region("LI", "Liechtenstein"),
    region("LT", "Lithuania"),
    region("LU", "Luxembourg"),
    region("MO", "Macao"),
    region("MG", "Madagascar"),
    region("MW", "Malawi"),
    region("MY", "Malaysia"),
    region("MV", "Maldives"),
    region("ML", "Mali"),
    region("MT", "Malta"),
    region("MH", "Marshall Islands"),
    region("MQ", "Martinique"),
    region("MR", "Mauritania"),
    region("MU", "Mauritius"),
    region("YT", "Mayotte"),
    region("MX", "Mexico"),
    region("FM", "Micronesia"),
    region("MD", "Moldova"),
    region("MC", "Monaco"),
    region("MN", "Mongolia"),
    region("ME", "Montenegro"),
    region("MS", "Montserrat"),
    region("MA", "Morocco"),
    region("MZ", "Mozambique"),
    region("MM", "Myanmar"),
    region("NA", "Namibia"),
    region("NR", "Nauru"),
    region("NP", "Nepal"),
    region("NL", "Netherlands"),
    region("NC", "New Caledonia"),
    region("NZ", "New Zealand"),
    region("NI", "Nicaragua"),
    region("NE", "Niger"),
    region("NG", "Nigeria"),
    region("NU", "Niue"),
    region("NF", "Norfolk Island"),
    region("MK", "North Macedonia"),
    region("MP", "Northern Mariana Islands"),
    region("NO", "Norway"),
    region("OM", "Oman"),
    region("PK", "Pakistan"),
    region("PW", "Palau"),
    region("PS", "Palestine, State of"),
    region("PA", "Panama"),
    region("PG", "Papua New Guinea"),
    region("PY", "Paraguay"),
    region("PE", "Peru"),
    region("PH", "Philippines"),
    region("PN", "Pitcairn"),
    region("PL", "Poland"),
    region("PT", "Portugal"),
    region("PR", "Puerto Rico"),
    region("QA", "Qatar"),
    region("RE", "Réunion"),
    region("RO", "Romania"),
    region("RU", "Russian Federation"),
    region("RW", "Rwanda"),
    region("BL", "Saint Barthélemy"),
    region("SH", "Saint Helena, Ascension and Tristan da Cunha"),
    region("KN", "Saint Kitts and Nevis"),
    region("LC", "Saint Lucia"),
    region("MF", "Saint Martin (French part)"),
    region("PM", "Saint Pierre and Miquelon"),
    region("VC", "Saint Vincent and the Grenadines"),
    region("WS", "Samoa"),
    region("SM", "San Marino"),
    region("ST", "Sao Tome and Principe"),
    region("SA", "Saudi Arabia"),
    region("SN", "Senegal"),
    region("RS", "Serbia"),
    region("SC", "Seychelles"),
    region("SL", "Sierra Leone"),
    region("SG", "Singapore"),
    region("SX", "Sint Maarten (Dutch part)"),
    region("SK", "Slovakia"),
    region("SI", "Slovenia"),
    region("SB", "Solomon Islands"),
    region("SO", "Somalia"),
    region("ZA", "South Africa"),
    region("GS", "South Georgia and the South Sandwich Islands"),
    region("SS", "South Sudan"),
    region("ES", "Spain"),
    region("LK", "Sri Lanka"),
    region("SD", "Sudan"),
    region("SR", "Suriname"),
    region("SJ", "Svalbard and Jan Mayen"),
    region("SE", "Sweden"),
    region("CH", "Switzerland"),
    region("SY", "Syrian Arab Republic"),
    region("TW", "Taiwan"),
    region("TJ", "Tajikistan"),
    region("TZ", "Tanzania"),
    region("TH", "Thailand"),
    region("TL", "Timor-Leste"),
    region("TG", "Togo"),
    region("TK", "Tokelau"),
    region("TO", "Tonga"),
    region("TT", "Trinidad and Tobago"),
    region("TN", "Tunisia"),
    region("TR", "Türkiye"),
    region("TM", "Turkmenistan"),
    region("TC", "Turks and Caicos Islands"),
    region("TV", "Tuvalu"),
    region("UG", "Uganda"),
    region("UA", "Ukraine"),
    region("AE", "United Arab Emirates"),
    region("GB", "United Kingdom"),
    region("US", "United States"),
    region("UM", "United States Minor Outlying Islands"),
    region("UY", "Uruguay"),
    region("UZ", "Uzbekistan"),
    region("VU", "Vanuatu"),
    region("VE", "Venezuela"),
    region("VN", "Viet Nam"),
    region("VG", "Virgin Islands (British)"),
    region("VI", "Virgin Islands (U.S.)"),
    region("WF", "Wallis and Futuna"),
    region("EH", "Western Sahara"),
    region("YE", "Yemen"),
    region("ZM", "Zambia"),
    region("ZW", "Zimbabwe"),
];
