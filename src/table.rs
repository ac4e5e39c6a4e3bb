//! Precomputed constant tables.

pub const SMALLEST_POWER_OF_FIVE: i32 = -348;
pub const LARGEST_POWER_OF_FIVE: i32 = 347;
pub const N_POWERS_OF_FIVE: usize = (LARGEST_POWER_OF_FIVE - SMALLEST_POWER_OF_FIVE + 1) as usize;

/// 128-bit mantissas of `10^q` for `q` in `SMALLEST_POWER_OF_FIVE..=LARGEST_POWER_OF_FIVE`,
/// normalized so that the high word has its top bit set. Stored as `(hi, lo)`.
/// Rows for `q >= 0` are truncated; rows for `q < 0` are `2^b / 5^-q` rounded up.
#[rustfmt::skip]
pub static POWER_OF_FIVE_128: [(u64, u64); N_POWERS_OF_FIVE] = [
    (0xfa8fd5a0081c0288, 0x1732c869cd60e453), // 1e-348
    (0x9c99e58405118195, 0x0e7fbd42205c8eb4), // 1e-347
    (0xc3c05ee50655e1fa, 0x521fac92a873b261), // 1e-346
    (0xf4b0769e47eb5a78, 0xe6a797b752909ef9), // 1e-345
    (0x98ee4a22ecf3188b, 0x9028bed2939a635c), // 1e-344
    (0xbf29dcaba82fdeae, 0x7432ee873880fc33), // 1e-343
    (0xeef453d6923bd65a, 0x113faa2906a13b3f), // 1e-342
    (0x9558b4661b6565f8, 0x4ac7ca59a424c507), // 1e-341
    (0xbaaee17fa23ebf76, 0x5d79bcf00d2df649), // 1e-340
    (0xe95a99df8ace6f53, 0xf4d82c2c107973dc), // 1e-339
    (0x91d8a02bb6c10594, 0x79071b9b8a4be869), // 1e-338
    (0xb64ec836a47146f9, 0x9748e2826cdee284), // 1e-337
    (0xe3e27a444d8d98b7, 0xfd1b1b2308169b25), // 1e-336
    (0x8e6d8c6ab0787f72, 0xfe30f0f5e50e20f7), // 1e-335
    (0xb208ef855c969f4f, 0xbdbd2d335e51a935), // 1e-334
    (0xde8b2b66b3bc4723, 0xad2c788035e61382), // 1e-333
    (0x8b16fb203055ac76, 0x4c3bcb5021afcc31), // 1e-332
    (0xaddcb9e83c6b1793, 0xdf4abe242a1bbf3d), // 1e-331
    (0xd953e8624b85dd78, 0xd71d6dad34a2af0d), // 1e-330
    (0x87d4713d6f33aa6b, 0x8672648c40e5ad68), // 1e-329
    (0xa9c98d8ccb009506, 0x680efdaf511f18c2), // 1e-328
    (0xd43bf0effdc0ba48, 0x0212bd1b2566def2), // 1e-327
    (0x84a57695fe98746d, 0x014bb630f7604b57), // 1e-326
    (0xa5ced43b7e3e9188, 0x419ea3bd35385e2d), // 1e-325
    (0xcf42894a5dce35ea, 0x52064cac828675b9), // 1e-324
    (0x818995ce7aa0e1b2, 0x7343efebd1940993), // 1e-323
    (0xa1ebfb4219491a1f, 0x1014ebe6c5f90bf8), // 1e-322
    (0xca66fa129f9b60a6, 0xd41a26e077774ef6), // 1e-321
    (0xfd00b897478238d0, 0x8920b098955522b4), // 1e-320
    (0x9e20735e8cb16382, 0x55b46e5f5d5535b0), // 1e-319
    (0xc5a890362fddbc62, 0xeb2189f734aa831d), // 1e-318
    (0xf712b443bbd52b7b, 0xa5e9ec7501d523e4), // 1e-317
    (0x9a6bb0aa55653b2d, 0x47b233c92125366e), // 1e-316
    (0xc1069cd4eabe89f8, 0x999ec0bb696e840a), // 1e-315
    (0xf148440a256e2c76, 0xc00670ea43ca250d), // 1e-314
    (0x96cd2a865764dbca, 0x380406926a5e5728), // 1e-313
    (0xbc807527ed3e12bc, 0xc605083704f5ecf2), // 1e-312
    (0xeba09271e88d976b, 0xf7864a44c633682e), // 1e-311
    (0x93445b8731587ea3, 0x7ab3ee6afbe0211d), // 1e-310
    (0xb8157268fdae9e4c, 0x5960ea05bad82964), // 1e-309
    (0xe61acf033d1a45df, 0x6fb92487298e33bd), // 1e-308
    (0x8fd0c16206306bab, 0xa5d3b6d479f8e056), // 1e-307
    (0xb3c4f1ba87bc8696, 0x8f48a4899877186c), // 1e-306
    (0xe0b62e2929aba83c, 0x331acdabfe94de87), // 1e-305
    (0x8c71dcd9ba0b4925, 0x9ff0c08b7f1d0b14), // 1e-304
    (0xaf8e5410288e1b6f, 0x07ecf0ae5ee44dd9), // 1e-303
    (0xdb71e91432b1a24a, 0xc9e82cd9f69d6150), // 1e-302
    (0x892731ac9faf056e, 0xbe311c083a225cd2), // 1e-301
    (0xab70fe17c79ac6ca, 0x6dbd630a48aaf406), // 1e-300
    (0xd64d3d9db981787d, 0x092cbbccdad5b108), // 1e-299
    (0x85f0468293f0eb4e, 0x25bbf56008c58ea5), // 1e-298
    (0xa76c582338ed2621, 0xaf2af2b80af6f24e), // 1e-297
    (0xd1476e2c07286faa, 0x1af5af660db4aee1), // 1e-296
    (0x82cca4db847945ca, 0x50d98d9fc890ed4d), // 1e-295
    (0xa37fce126597973c, 0xe50ff107bab528a0), // 1e-294
    (0xcc5fc196fefd7d0c, 0x1e53ed49a96272c8), // 1e-293
    (0xff77b1fcbebcdc4f, 0x25e8e89c13bb0f7a), // 1e-292
    (0x9faacf3df73609b1, 0x77b191618c54e9ac), // 1e-291
    (0xc795830d75038c1d, 0xd59df5b9ef6a2417), // 1e-290
    (0xf97ae3d0d2446f25, 0x4b0573286b44ad1d), // 1e-289
    (0x9becce62836ac577, 0x4ee367f9430aec32), // 1e-288
    (0xc2e801fb244576d5, 0x229c41f793cda73f), // 1e-287
    (0xf3a20279ed56d48a, 0x6b43527578c1110f), // 1e-286
    (0x9845418c345644d6, 0x830a13896b78aaa9), // 1e-285
    (0xbe5691ef416bd60c, 0x23cc986bc656d553), // 1e-284
    (0xedec366b11c6cb8f, 0x2cbfbe86b7ec8aa8), // 1e-283
    (0x94b3a202eb1c3f39, 0x7bf7d71432f3d6a9), // 1e-282
    (0xb9e08a83a5e34f07, 0xdaf5ccd93fb0cc53), // 1e-281
    (0xe858ad248f5c22c9, 0xd1b3400f8f9cff68), // 1e-280
    (0x91376c36d99995be, 0x23100809b9c21fa1), // 1e-279
    (0xb58547448ffffb2d, 0xabd40a0c2832a78a), // 1e-278
    (0xe2e69915b3fff9f9, 0x16c90c8f323f516c), // 1e-277
    (0x8dd01fad907ffc3b, 0xae3da7d97f6792e3), // 1e-276
    (0xb1442798f49ffb4a, 0x99cd11cfdf41779c), // 1e-275
    (0xdd95317f31c7fa1d, 0x40405643d711d583), // 1e-274
    (0x8a7d3eef7f1cfc52, 0x482835ea666b2572), // 1e-273
    (0xad1c8eab5ee43b66, 0xda3243650005eecf), // 1e-272
    (0xd863b256369d4a40, 0x90bed43e40076a82), // 1e-271
    (0x873e4f75e2224e68, 0x5a7744a6e804a291), // 1e-270
    (0xa90de3535aaae202, 0x711515d0a205cb36), // 1e-269
    (0xd3515c2831559a83, 0x0d5a5b44ca873e03), // 1e-268
    (0x8412d9991ed58091, 0xe858790afe9486c2), // 1e-267
    (0xa5178fff668ae0b6, 0x626e974dbe39a872), // 1e-266
    (0xce5d73ff402d98e3, 0xfb0a3d212dc8128f), // 1e-265
    (0x80fa687f881c7f8e, 0x7ce66634bc9d0b99), // 1e-264
    (0xa139029f6a239f72, 0x1c1fffc1ebc44e80), // 1e-263
    (0xc987434744ac874e, 0xa327ffb266b56220), // 1e-262
    (0xfbe9141915d7a922, 0x4bf1ff9f0062baa8), // 1e-261
    (0x9d71ac8fada6c9b5, 0x6f773fc3603db4a9), // 1e-260
    (0xc4ce17b399107c22, 0xcb550fb4384d21d3), // 1e-259
    (0xf6019da07f549b2b, 0x7e2a53a146606a48), // 1e-258
    (0x99c102844f94e0fb, 0x2eda7444cbfc426d), // 1e-257
    (0xc0314325637a1939, 0xfa911155fefb5308), // 1e-256
    (0xf03d93eebc589f88, 0x793555ab7eba27ca), // 1e-255
    (0x96267c7535b763b5, 0x4bc1558b2f3458de), // 1e-254
    (0xbbb01b9283253ca2, 0x9eb1aaedfb016f16), // 1e-253
    (0xea9c227723ee8bcb, 0x465e15a979c1cadc), // 1e-252
    (0x92a1958a7675175f, 0x0bfacd89ec191ec9), // 1e-251
    (0xb749faed14125d36, 0xcef980ec671f667b), // 1e-250
    (0xe51c79a85916f484, 0x82b7e12780e7401a), // 1e-249
    (0x8f31cc0937ae58d2, 0xd1b2ecb8b0908810), // 1e-248
    (0xb2fe3f0b8599ef07, 0x861fa7e6dcb4aa15), // 1e-247
    (0xdfbdcece67006ac9, 0x67a791e093e1d49a), // 1e-246
    (0x8bd6a141006042bd, 0xe0c8bb2c5c6d24e0), // 1e-245
    (0xaecc49914078536d, 0x58fae9f773886e18), // 1e-244
    (0xda7f5bf590966848, 0xaf39a475506a899e), // 1e-243
    (0x888f99797a5e012d, 0x6d8406c952429603), // 1e-242
    (0xaab37fd7d8f58178, 0xc8e5087ba6d33b83), // 1e-241
    (0xd5605fcdcf32e1d6, 0xfb1e4a9a90880a64), // 1e-240
    (0x855c3be0a17fcd26, 0x5cf2eea09a55067f), // 1e-239
    (0xa6b34ad8c9dfc06f, 0xf42faa48c0ea481e), // 1e-238
    (0xd0601d8efc57b08b, 0xf13b94daf124da26), // 1e-237
    (0x823c12795db6ce57, 0x76c53d08d6b70858), // 1e-236
    (0xa2cb1717b52481ed, 0x54768c4b0c64ca6e), // 1e-235
    (0xcb7ddcdda26da268, 0xa9942f5dcf7dfd09), // 1e-234
    (0xfe5d54150b090b02, 0xd3f93b35435d7c4c), // 1e-233
    (0x9efa548d26e5a6e1, 0xc47bc5014a1a6daf), // 1e-232
    (0xc6b8e9b0709f109a, 0x359ab6419ca1091b), // 1e-231
    (0xf867241c8cc6d4c0, 0xc30163d203c94b62), // 1e-230
    (0x9b407691d7fc44f8, 0x79e0de63425dcf1d), // 1e-229
    (0xc21094364dfb5636, 0x985915fc12f542e4), // 1e-228
    (0xf294b943e17a2bc4, 0x3e6f5b7b17b2939d), // 1e-227
    (0x979cf3ca6cec5b5a, 0xa705992ceecf9c42), // 1e-226
    (0xbd8430bd08277231, 0x50c6ff782a838353), // 1e-225
    (0xece53cec4a314ebd, 0xa4f8bf5635246428), // 1e-224
    (0x940f4613ae5ed136, 0x871b7795e136be99), // 1e-223
    (0xb913179899f68584, 0x28e2557b59846e3f), // 1e-222
    (0xe757dd7ec07426e5, 0x331aeada2fe589cf), // 1e-221
    (0x9096ea6f3848984f, 0x3ff0d2c85def7621), // 1e-220
    (0xb4bca50b065abe63, 0x0fed077a756b53a9), // 1e-219
    (0xe1ebce4dc7f16dfb, 0xd3e8495912c62894), // 1e-218
    (0x8d3360f09cf6e4bd, 0x64712dd7abbbd95c), // 1e-217
    (0xb080392cc4349dec, 0xbd8d794d96aacfb3), // 1e-216
    (0xdca04777f541c567, 0xecf0d7a0fc5583a0), // 1e-215
    (0x89e42caaf9491b60, 0xf41686c49db57244), // 1e-214
    (0xac5d37d5b79b6239, 0x311c2875c522ced5), // 1e-213
    (0xd77485cb25823ac7, 0x7d633293366b828b), // 1e-212
    (0x86a8d39ef77164bc, 0xae5dff9c02033197), // 1e-211
    (0xa8530886b54dbdeb, 0xd9f57f830283fdfc), // 1e-210
    (0xd267caa862a12d66, 0xd072df63c324fd7b), // 1e-209
    (0x8380dea93da4bc60, 0x4247cb9e59f71e6d), // 1e-208
    (0xa46116538d0deb78, 0x52d9be85f074e608), // 1e-207
    (0xcd795be870516656, 0x67902e276c921f8b), // 1e-206
    (0x806bd9714632dff6, 0x00ba1cd8a3db53b6), // 1e-205
    (0xa086cfcd97bf97f3, 0x80e8a40eccd228a4), // 1e-204
    (0xc8a883c0fdaf7df0, 0x6122cd128006b2cd), // 1e-203
    (0xfad2a4b13d1b5d6c, 0x796b805720085f81), // 1e-202
    (0x9cc3a6eec6311a63, 0xcbe3303674053bb0), // 1e-201
    (0xc3f490aa77bd60fc, 0xbedbfc4411068a9c), // 1e-200
    (0xf4f1b4d515acb93b, 0xee92fb5515482d44), // 1e-199
    (0x991711052d8bf3c5, 0x751bdd152d4d1c4a), // 1e-198
    (0xbf5cd54678eef0b6, 0xd262d45a78a0635d), // 1e-197
    (0xef340a98172aace4, 0x86fb897116c87c34), // 1e-196
    (0x9580869f0e7aac0e, 0xd45d35e6ae3d4da0), // 1e-195
    (0xbae0a846d2195712, 0x8974836059cca109), // 1e-194
    (0xe998d258869facd7, 0x2bd1a438703fc94b), // 1e-193
    (0x91ff83775423cc06, 0x7b6306a34627ddcf), // 1e-192
    (0xb67f6455292cbf08, 0x1a3bc84c17b1d542), // 1e-191
    (0xe41f3d6a7377eeca, 0x20caba5f1d9e4a93), // 1e-190
    (0x8e938662882af53e, 0x547eb47b7282ee9c), // 1e-189
    (0xb23867fb2a35b28d, 0xe99e619a4f23aa43), // 1e-188
    (0xdec681f9f4c31f31, 0x6405fa00e2ec94d4), // 1e-187
    (0x8b3c113c38f9f37e, 0xde83bc408dd3dd04), // 1e-186
    (0xae0b158b4738705e, 0x9624ab50b148d445), // 1e-185
    (0xd98ddaee19068c76, 0x3badd624dd9b0957), // 1e-184
    (0x87f8a8d4cfa417c9, 0xe54ca5d70a80e5d6), // 1e-183
    (0xa9f6d30a038d1dbc, 0x5e9fcf4ccd211f4c), // 1e-182
    (0xd47487cc8470652b, 0x7647c3200069671f), // 1e-181
    (0x84c8d4dfd2c63f3b, 0x29ecd9f40041e073), // 1e-180
    (0xa5fb0a17c777cf09, 0xf468107100525890), // 1e-179
    (0xcf79cc9db955c2cc, 0x7182148d4066eeb4), // 1e-178
    (0x81ac1fe293d599bf, 0xc6f14cd848405530), // 1e-177
    (0xa21727db38cb002f, 0xb8ada00e5a506a7c), // 1e-176
    (0xca9cf1d206fdc03b, 0xa6d90811f0e4851c), // 1e-175
    (0xfd442e4688bd304a, 0x908f4a166d1da663), // 1e-174
    (0x9e4a9cec15763e2e, 0x9a598e4e043287fe), // 1e-173
    (0xc5dd44271ad3cdba, 0x40eff1e1853f29fd), // 1e-172
    (0xf7549530e188c128, 0xd12bee59e68ef47c), // 1e-171
    (0x9a94dd3e8cf578b9, 0x82bb74f8301958ce), // 1e-170
    (0xc13a148e3032d6e7, 0xe36a52363c1faf01), // 1e-169
    (0xf18899b1bc3f8ca1, 0xdc44e6c3cb279ac1), // 1e-168
    (0x96f5600f15a7b7e5, 0x29ab103a5ef8c0b9), // 1e-167
    (0xbcb2b812db11a5de, 0x7415d448f6b6f0e7), // 1e-166
    (0xebdf661791d60f56, 0x111b495b3464ad21), // 1e-165
    (0x936b9fcebb25c995, 0xcab10dd900beec34), // 1e-164
    (0xb84687c269ef3bfb, 0x3d5d514f40eea742), // 1e-163
    (0xe65829b3046b0afa, 0x0cb4a5a3112a5112), // 1e-162
    (0x8ff71a0fe2c2e6dc, 0x47f0e785eaba72ab), // 1e-161
    (0xb3f4e093db73a093, 0x59ed216765690f56), // 1e-160
    (0xe0f218b8d25088b8, 0x306869c13ec3532c), // 1e-159
    (0x8c974f7383725573, 0x1e414218c73a13fb), // 1e-158
    (0xafbd2350644eeacf, 0xe5d1929ef90898fa), // 1e-157
    (0xdbac6c247d62a583, 0xdf45f746b74abf39), // 1e-156
    (0x894bc396ce5da772, 0x6b8bba8c328eb783), // 1e-155
    (0xab9eb47c81f5114f, 0x066ea92f3f326564), // 1e-154
    (0xd686619ba27255a2, 0xc80a537b0efefebd), // 1e-153
    (0x8613fd0145877585, 0xbd06742ce95f5f36), // 1e-152
    (0xa798fc4196e952e7, 0x2c48113823b73704), // 1e-151
    (0xd17f3b51fca3a7a0, 0xf75a15862ca504c5), // 1e-150
    (0x82ef85133de648c4, 0x9a984d73dbe722fb), // 1e-149
    (0xa3ab66580d5fdaf5, 0xc13e60d0d2e0ebba), // 1e-148
    (0xcc963fee10b7d1b3, 0x318df905079926a8), // 1e-147
    (0xffbbcfe994e5c61f, 0xfdf17746497f7052), // 1e-146
    (0x9fd561f1fd0f9bd3, 0xfeb6ea8bedefa633), // 1e-145
    (0xc7caba6e7c5382c8, 0xfe64a52ee96b8fc0), // 1e-144
    (0xf9bd690a1b68637b, 0x3dfdce7aa3c673b0), // 1e-143
    (0x9c1661a651213e2d, 0x06bea10ca65c084e), // 1e-142
    (0xc31bfa0fe5698db8, 0x486e494fcff30a62), // 1e-141
    (0xf3e2f893dec3f126, 0x5a89dba3c3efccfa), // 1e-140
    (0x986ddb5c6b3a76b7, 0xf89629465a75e01c), // 1e-139
    (0xbe89523386091465, 0xf6bbb397f1135823), // 1e-138
    (0xee2ba6c0678b597f, 0x746aa07ded582e2c), // 1e-137
    (0x94db483840b717ef, 0xa8c2a44eb4571cdc), // 1e-136
    (0xba121a4650e4ddeb, 0x92f34d62616ce413), // 1e-135
    (0xe896a0d7e51e1566, 0x77b020baf9c81d17), // 1e-134
    (0x915e2486ef32cd60, 0x0ace1474dc1d122e), // 1e-133
    (0xb5b5ada8aaff80b8, 0x0d819992132456ba), // 1e-132
    (0xe3231912d5bf60e6, 0x10e1fff697ed6c69), // 1e-131
    (0x8df5efabc5979c8f, 0xca8d3ffa1ef463c1), // 1e-130
    (0xb1736b96b6fd83b3, 0xbd308ff8a6b17cb2), // 1e-129
    (0xddd0467c64bce4a0, 0xac7cb3f6d05ddbde), // 1e-128
    (0x8aa22c0dbef60ee4, 0x6bcdf07a423aa96b), // 1e-127
    (0xad4ab7112eb3929d, 0x86c16c98d2c953c6), // 1e-126
    (0xd89d64d57a607744, 0xe871c7bf077ba8b7), // 1e-125
    (0x87625f056c7c4a8b, 0x11471cd764ad4972), // 1e-124
    (0xa93af6c6c79b5d2d, 0xd598e40d3dd89bcf), // 1e-123
    (0xd389b47879823479, 0x4aff1d108d4ec2c3), // 1e-122
    (0x843610cb4bf160cb, 0xcedf722a585139ba), // 1e-121
    (0xa54394fe1eedb8fe, 0xc2974eb4ee658828), // 1e-120
    (0xce947a3da6a9273e, 0x733d226229feea32), // 1e-119
    (0x811ccc668829b887, 0x0806357d5a3f525f), // 1e-118
    (0xa163ff802a3426a8, 0xca07c2dcb0cf26f7), // 1e-117
    (0xc9bcff6034c13052, 0xfc89b393dd02f0b5), // 1e-116
    (0xfc2c3f3841f17c67, 0xbbac2078d443ace2), // 1e-115
    (0x9d9ba7832936edc0, 0xd54b944b84aa4c0d), // 1e-114
    (0xc5029163f384a931, 0x0a9e795e65d4df11), // 1e-113
    (0xf64335bcf065d37d, 0x4d4617b5ff4a16d5), // 1e-112
    (0x99ea0196163fa42e, 0x504bced1bf8e4e45), // 1e-111
    (0xc06481fb9bcf8d39, 0xe45ec2862f71e1d6), // 1e-110
    (0xf07da27a82c37088, 0x5d767327bb4e5a4c), // 1e-109
    (0x964e858c91ba2655, 0x3a6a07f8d510f86f), // 1e-108
    (0xbbe226efb628afea, 0x890489f70a55368b), // 1e-107
    (0xeadab0aba3b2dbe5, 0x2b45ac74ccea842e), // 1e-106
    (0x92c8ae6b464fc96f, 0x3b0b8bc90012929d), // 1e-105
    (0xb77ada0617e3bbcb, 0x09ce6ebb40173744), // 1e-104
    (0xe55990879ddcaabd, 0xcc420a6a101d0515), // 1e-103
    (0x8f57fa54c2a9eab6, 0x9fa946824a12232d), // 1e-102
    (0xb32df8e9f3546564, 0x47939822dc96abf9), // 1e-101
    (0xdff9772470297ebd, 0x59787e2b93bc56f7), // 1e-100
    (0x8bfbea76c619ef36, 0x57eb4edb3c55b65a), // 1e-99
    (0xaefae51477a06b03, 0xede622920b6b23f1), // 1e-98
    (0xdab99e59958885c4, 0xe95fab368e45eced), // 1e-97
    (0x88b402f7fd75539b, 0x11dbcb0218ebb414), // 1e-96
    (0xaae103b5fcd2a881, 0xd652bdc29f26a119), // 1e-95
    (0xd59944a37c0752a2, 0x4be76d3346f0495f), // 1e-94
    (0x857fcae62d8493a5, 0x6f70a4400c562ddb), // 1e-93
    (0xa6dfbd9fb8e5b88e, 0xcb4ccd500f6bb952), // 1e-92
    (0xd097ad07a71f26b2, 0x7e2000a41346a7a7), // 1e-91
    (0x825ecc24c873782f, 0x8ed400668c0c28c8), // 1e-90
    (0xa2f67f2dfa90563b, 0x728900802f0f32fa), // 1e-89
    (0xcbb41ef979346bca, 0x4f2b40a03ad2ffb9), // 1e-88
    (0xfea126b7d78186bc, 0xe2f610c84987bfa8), // 1e-87
    (0x9f24b832e6b0f436, 0x0dd9ca7d2df4d7c9), // 1e-86
    (0xc6ede63fa05d3143, 0x91503d1c79720dbb), // 1e-85
    (0xf8a95fcf88747d94, 0x75a44c6397ce912a), // 1e-84
    (0x9b69dbe1b548ce7c, 0xc986afbe3ee11aba), // 1e-83
    (0xc24452da229b021b, 0xfbe85badce996168), // 1e-82
    (0xf2d56790ab41c2a2, 0xfae27299423fb9c3), // 1e-81
    (0x97c560ba6b0919a5, 0xdccd879fc967d41a), // 1e-80
    (0xbdb6b8e905cb600f, 0x5400e987bbc1c920), // 1e-79
    (0xed246723473e3813, 0x290123e9aab23b68), // 1e-78
    (0x9436c0760c86e30b, 0xf9a0b6720aaf6521), // 1e-77
    (0xb94470938fa89bce, 0xf808e40e8d5b3e69), // 1e-76
    (0xe7958cb87392c2c2, 0xb60b1d1230b20e04), // 1e-75
    (0x90bd77f3483bb9b9, 0xb1c6f22b5e6f48c2), // 1e-74
    (0xb4ecd5f01a4aa828, 0x1e38aeb6360b1af3), // 1e-73
    (0xe2280b6c20dd5232, 0x25c6da63c38de1b0), // 1e-72
    (0x8d590723948a535f, 0x579c487e5a38ad0e), // 1e-71
    (0xb0af48ec79ace837, 0x2d835a9df0c6d851), // 1e-70
    (0xdcdb1b2798182244, 0xf8e431456cf88e65), // 1e-69
    (0x8a08f0f8bf0f156b, 0x1b8e9ecb641b58ff), // 1e-68
    (0xac8b2d36eed2dac5, 0xe272467e3d222f3f), // 1e-67
    (0xd7adf884aa879177, 0x5b0ed81dcc6abb0f), // 1e-66
    (0x86ccbb52ea94baea, 0x98e947129fc2b4e9), // 1e-65
    (0xa87fea27a539e9a5, 0x3f2398d747b36224), // 1e-64
    (0xd29fe4b18e88640e, 0x8eec7f0d19a03aad), // 1e-63
    (0x83a3eeeef9153e89, 0x1953cf68300424ac), // 1e-62
    (0xa48ceaaab75a8e2b, 0x5fa8c3423c052dd7), // 1e-61
    (0xcdb02555653131b6, 0x3792f412cb06794d), // 1e-60
    (0x808e17555f3ebf11, 0xe2bbd88bbee40bd0), // 1e-59
    (0xa0b19d2ab70e6ed6, 0x5b6aceaeae9d0ec4), // 1e-58
    (0xc8de047564d20a8b, 0xf245825a5a445275), // 1e-57
    (0xfb158592be068d2e, 0xeed6e2f0f0d56712), // 1e-56
    (0x9ced737bb6c4183d, 0x55464dd69685606b), // 1e-55
    (0xc428d05aa4751e4c, 0xaa97e14c3c26b886), // 1e-54
    (0xf53304714d9265df, 0xd53dd99f4b3066a8), // 1e-53
    (0x993fe2c6d07b7fab, 0xe546a8038efe4029), // 1e-52
    (0xbf8fdb78849a5f96, 0xde98520472bdd033), // 1e-51
    (0xef73d256a5c0f77c, 0x963e66858f6d4440), // 1e-50
    (0x95a8637627989aad, 0xdde7001379a44aa8), // 1e-49
    (0xbb127c53b17ec159, 0x5560c018580d5d52), // 1e-48
    (0xe9d71b689dde71af, 0xaab8f01e6e10b4a6), // 1e-47
    (0x9226712162ab070d, 0xcab3961304ca70e8), // 1e-46
    (0xb6b00d69bb55c8d1, 0x3d607b97c5fd0d22), // 1e-45
    (0xe45c10c42a2b3b05, 0x8cb89a7db77c506a), // 1e-44
    (0x8eb98a7a9a5b04e3, 0x77f3608e92adb242), // 1e-43
    (0xb267ed1940f1c61c, 0x55f038b237591ed3), // 1e-42
    (0xdf01e85f912e37a3, 0x6b6c46dec52f6688), // 1e-41
    (0x8b61313bbabce2c6, 0x2323ac4b3b3da015), // 1e-40
    (0xae397d8aa96c1b77, 0xabec975e0a0d081a), // 1e-39
    (0xd9c7dced53c72255, 0x96e7bd358c904a21), // 1e-38
    (0x881cea14545c7575, 0x7e50d64177da2e54), // 1e-37
    (0xaa242499697392d2, 0xdde50bd1d5d0b9e9), // 1e-36
    (0xd4ad2dbfc3d07787, 0x955e4ec64b44e864), // 1e-35
    (0x84ec3c97da624ab4, 0xbd5af13bef0b113e), // 1e-34
    (0xa6274bbdd0fadd61, 0xecb1ad8aeacdd58e), // 1e-33
    (0xcfb11ead453994ba, 0x67de18eda5814af2), // 1e-32
    (0x81ceb32c4b43fcf4, 0x80eacf948770ced7), // 1e-31
    (0xa2425ff75e14fc31, 0xa1258379a94d028d), // 1e-30
    (0xcad2f7f5359a3b3e, 0x096ee45813a04330), // 1e-29
    (0xfd87b5f28300ca0d, 0x8bca9d6e188853fc), // 1e-28
    (0x9e74d1b791e07e48, 0x775ea264cf55347e), // 1e-27
    (0xc612062576589dda, 0x95364afe032a819e), // 1e-26
    (0xf79687aed3eec551, 0x3a83ddbd83f52205), // 1e-25
    (0x9abe14cd44753b52, 0xc4926a9672793543), // 1e-24
    (0xc16d9a0095928a27, 0x75b7053c0f178294), // 1e-23
    (0xf1c90080baf72cb1, 0x5324c68b12dd6339), // 1e-22
    (0x971da05074da7bee, 0xd3f6fc16ebca5e04), // 1e-21
    (0xbce5086492111aea, 0x88f4bb1ca6bcf585), // 1e-20
    (0xec1e4a7db69561a5, 0x2b31e9e3d06c32e6), // 1e-19
    (0x9392ee8e921d5d07, 0x3aff322e62439fd0), // 1e-18
    (0xb877aa3236a4b449, 0x09befeb9fad487c3), // 1e-17
    (0xe69594bec44de15b, 0x4c2ebe687989a9b4), // 1e-16
    (0x901d7cf73ab0acd9, 0x0f9d37014bf60a11), // 1e-15
    (0xb424dc35095cd80f, 0x538484c19ef38c95), // 1e-14
    (0xe12e13424bb40e13, 0x2865a5f206b06fba), // 1e-13
    (0x8cbccc096f5088cb, 0xf93f87b7442e45d4), // 1e-12
    (0xafebff0bcb24aafe, 0xf78f69a51539d749), // 1e-11
    (0xdbe6fecebdedd5be, 0xb573440e5a884d1c), // 1e-10
    (0x89705f4136b4a597, 0x31680a88f8953031), // 1e-9
    (0xabcc77118461cefc, 0xfdc20d2b36ba7c3e), // 1e-8
    (0xd6bf94d5e57a42bc, 0x3d32907604691b4d), // 1e-7
    (0x8637bd05af6c69b5, 0xa63f9a49c2c1b110), // 1e-6
    (0xa7c5ac471b478423, 0x0fcf80dc33721d54), // 1e-5
    (0xd1b71758e219652b, 0xd3c36113404ea4a9), // 1e-4
    (0x83126e978d4fdf3b, 0x645a1cac083126ea), // 1e-3
    (0xa3d70a3d70a3d70a, 0x3d70a3d70a3d70a4), // 1e-2
    (0xcccccccccccccccc, 0xcccccccccccccccd), // 1e-1
    (0x8000000000000000, 0x0000000000000000), // 1e0
    (0xa000000000000000, 0x0000000000000000), // 1e1
    (0xc800000000000000, 0x0000000000000000), // 1e2
    (0xfa00000000000000, 0x0000000000000000), // 1e3
    (0x9c40000000000000, 0x0000000000000000), // 1e4
    (0xc350000000000000, 0x0000000000000000), // 1e5
    (0xf424000000000000, 0x0000000000000000), // 1e6
    (0x9896800000000000, 0x0000000000000000), // 1e7
    (0xbebc200000000000, 0x0000000000000000), // 1e8
    (0xee6b280000000000, 0x0000000000000000), // 1e9
    (0x9502f90000000000, 0x0000000000000000), // 1e10
    (0xba43b74000000000, 0x0000000000000000), // 1e11
    (0xe8d4a51000000000, 0x0000000000000000), // 1e12
    (0x9184e72a00000000, 0x0000000000000000), // 1e13
    (0xb5e620f480000000, 0x0000000000000000), // 1e14
    (0xe35fa931a0000000, 0x0000000000000000), // 1e15
    (0x8e1bc9bf04000000, 0x0000000000000000), // 1e16
    (0xb1a2bc2ec5000000, 0x0000000000000000), // 1e17
    (0xde0b6b3a76400000, 0x0000000000000000), // 1e18
    (0x8ac7230489e80000, 0x0000000000000000), // 1e19
    (0xad78ebc5ac620000, 0x0000000000000000), // 1e20
    (0xd8d726b7177a8000, 0x0000000000000000), // 1e21
    (0x878678326eac9000, 0x0000000000000000), // 1e22
    (0xa968163f0a57b400, 0x0000000000000000), // 1e23
    (0xd3c21bcecceda100, 0x0000000000000000), // 1e24
    (0x84595161401484a0, 0x0000000000000000), // 1e25
    (0xa56fa5b99019a5c8, 0x0000000000000000), // 1e26
    (0xcecb8f27f4200f3a, 0x0000000000000000), // 1e27
    (0x813f3978f8940984, 0x4000000000000000), // 1e28
    (0xa18f07d736b90be5, 0x5000000000000000), // 1e29
    (0xc9f2c9cd04674ede, 0xa400000000000000), // 1e30
    (0xfc6f7c4045812296, 0x4d00000000000000), // 1e31
    (0x9dc5ada82b70b59d, 0xf020000000000000), // 1e32
    (0xc5371912364ce305, 0x6c28000000000000), // 1e33
    (0xf684df56c3e01bc6, 0xc732000000000000), // 1e34
    (0x9a130b963a6c115c, 0x3c7f400000000000), // 1e35
    (0xc097ce7bc90715b3, 0x4b9f100000000000), // 1e36
    (0xf0bdc21abb48db20, 0x1e86d40000000000), // 1e37
    (0x96769950b50d88f4, 0x1314448000000000), // 1e38
    (0xbc143fa4e250eb31, 0x17d955a000000000), // 1e39
    (0xeb194f8e1ae525fd, 0x5dcfab0800000000), // 1e40
    (0x92efd1b8d0cf37be, 0x5aa1cae500000000), // 1e41
    (0xb7abc627050305ad, 0xf14a3d9e40000000), // 1e42
    (0xe596b7b0c643c719, 0x6d9ccd05d0000000), // 1e43
    (0x8f7e32ce7bea5c6f, 0xe4820023a2000000), // 1e44
    (0xb35dbf821ae4f38b, 0xdda2802c8a800000), // 1e45
    (0xe0352f62a19e306e, 0xd50b2037ad200000), // 1e46
    (0x8c213d9da502de45, 0x4526f422cc340000), // 1e47
    (0xaf298d050e4395d6, 0x9670b12b7f410000), // 1e48
    (0xdaf3f04651d47b4c, 0x3c0cdd765f114000), // 1e49
    (0x88d8762bf324cd0f, 0xa5880a69fb6ac800), // 1e50
    (0xab0e93b6efee0053, 0x8eea0d047a457a00), // 1e51
    (0xd5d238a4abe98068, 0x72a4904598d6d880), // 1e52
    (0x85a36366eb71f041, 0x47a6da2b7f864750), // 1e53
    (0xa70c3c40a64e6c51, 0x999090b65f67d924), // 1e54
    (0xd0cf4b50cfe20765, 0xfff4b4e3f741cf6d), // 1e55
    (0x82818f1281ed449f, 0xbff8f10e7a8921a4), // 1e56
    (0xa321f2d7226895c7, 0xaff72d52192b6a0d), // 1e57
    (0xcbea6f8ceb02bb39, 0x9bf4f8a69f764490), // 1e58
    (0xfee50b7025c36a08, 0x02f236d04753d5b4), // 1e59
    (0x9f4f2726179a2245, 0x01d762422c946590), // 1e60
    (0xc722f0ef9d80aad6, 0x424d3ad2b7b97ef5), // 1e61
    (0xf8ebad2b84e0d58b, 0xd2e0898765a7deb2), // 1e62
    (0x9b934c3b330c8577, 0x63cc55f49f88eb2f), // 1e63
    (0xc2781f49ffcfa6d5, 0x3cbf6b71c76b25fb), // 1e64
    (0xf316271c7fc3908a, 0x8bef464e3945ef7a), // 1e65
    (0x97edd871cfda3a56, 0x97758bf0e3cbb5ac), // 1e66
    (0xbde94e8e43d0c8ec, 0x3d52eeed1cbea317), // 1e67
    (0xed63a231d4c4fb27, 0x4ca7aaa863ee4bdd), // 1e68
    (0x945e455f24fb1cf8, 0x8fe8caa93e74ef6a), // 1e69
    (0xb975d6b6ee39e436, 0xb3e2fd538e122b44), // 1e70
    (0xe7d34c64a9c85d44, 0x60dbbca87196b616), // 1e71
    (0x90e40fbeea1d3a4a, 0xbc8955e946fe31cd), // 1e72
    (0xb51d13aea4a488dd, 0x6babab6398bdbe41), // 1e73
    (0xe264589a4dcdab14, 0xc696963c7eed2dd1), // 1e74
    (0x8d7eb76070a08aec, 0xfc1e1de5cf543ca2), // 1e75
    (0xb0de65388cc8ada8, 0x3b25a55f43294bcb), // 1e76
    (0xdd15fe86affad912, 0x49ef0eb713f39ebe), // 1e77
    (0x8a2dbf142dfcc7ab, 0x6e3569326c784337), // 1e78
    (0xacb92ed9397bf996, 0x49c2c37f07965404), // 1e79
    (0xd7e77a8f87daf7fb, 0xdc33745ec97be906), // 1e80
    (0x86f0ac99b4e8dafd, 0x69a028bb3ded71a3), // 1e81
    (0xa8acd7c0222311bc, 0xc40832ea0d68ce0c), // 1e82
    (0xd2d80db02aabd62b, 0xf50a3fa490c30190), // 1e83
    (0x83c7088e1aab65db, 0x792667c6da79e0fa), // 1e84
    (0xa4b8cab1a1563f52, 0x577001b891185938), // 1e85
    (0xcde6fd5e09abcf26, 0xed4c0226b55e6f86), // 1e86
    (0x80b05e5ac60b6178, 0x544f8158315b05b4), // 1e87
    (0xa0dc75f1778e39d6, 0x696361ae3db1c721), // 1e88
    (0xc913936dd571c84c, 0x03bc3a19cd1e38e9), // 1e89
    (0xfb5878494ace3a5f, 0x04ab48a04065c723), // 1e90
    (0x9d174b2dcec0e47b, 0x62eb0d64283f9c76), // 1e91
    (0xc45d1df942711d9a, 0x3ba5d0bd324f8394), // 1e92
    (0xf5746577930d6500, 0xca8f44ec7ee36479), // 1e93
    (0x9968bf6abbe85f20, 0x7e998b13cf4e1ecb), // 1e94
    (0xbfc2ef456ae276e8, 0x9e3fedd8c321a67e), // 1e95
    (0xefb3ab16c59b14a2, 0xc5cfe94ef3ea101e), // 1e96
    (0x95d04aee3b80ece5, 0xbba1f1d158724a12), // 1e97
    (0xbb445da9ca61281f, 0x2a8a6e45ae8edc97), // 1e98
    (0xea1575143cf97226, 0xf52d09d71a3293bd), // 1e99
    (0x924d692ca61be758, 0x593c2626705f9c56), // 1e100
    (0xb6e0c377cfa2e12e, 0x6f8b2fb00c77836c), // 1e101
    (0xe498f455c38b997a, 0x0b6dfb9c0f956447), // 1e102
    (0x8edf98b59a373fec, 0x4724bd4189bd5eac), // 1e103
    (0xb2977ee300c50fe7, 0x58edec91ec2cb657), // 1e104
    (0xdf3d5e9bc0f653e1, 0x2f2967b66737e3ed), // 1e105
    (0x8b865b215899f46c, 0xbd79e0d20082ee74), // 1e106
    (0xae67f1e9aec07187, 0xecd8590680a3aa11), // 1e107
    (0xda01ee641a708de9, 0xe80e6f4820cc9495), // 1e108
    (0x884134fe908658b2, 0x3109058d147fdcdd), // 1e109
    (0xaa51823e34a7eede, 0xbd4b46f0599fd415), // 1e110
    (0xd4e5e2cdc1d1ea96, 0x6c9e18ac7007c91a), // 1e111
    (0x850fadc09923329e, 0x03e2cf6bc604ddb0), // 1e112
    (0xa6539930bf6bff45, 0x84db8346b786151c), // 1e113
    (0xcfe87f7cef46ff16, 0xe612641865679a63), // 1e114
    (0x81f14fae158c5f6e, 0x4fcb7e8f3f60c07e), // 1e115
    (0xa26da3999aef7749, 0xe3be5e330f38f09d), // 1e116
    (0xcb090c8001ab551c, 0x5cadf5bfd3072cc5), // 1e117
    (0xfdcb4fa002162a63, 0x73d9732fc7c8f7f6), // 1e118
    (0x9e9f11c4014dda7e, 0x2867e7fddcdd9afa), // 1e119
    (0xc646d63501a1511d, 0xb281e1fd541501b8), // 1e120
    (0xf7d88bc24209a565, 0x1f225a7ca91a4226), // 1e121
    (0x9ae757596946075f, 0x3375788de9b06958), // 1e122
    (0xc1a12d2fc3978937, 0x0052d6b1641c83ae), // 1e123
    (0xf209787bb47d6b84, 0xc0678c5dbd23a49a), // 1e124
    (0x9745eb4d50ce6332, 0xf840b7ba963646e0), // 1e125
    (0xbd176620a501fbff, 0xb650e5a93bc3d898), // 1e126
    (0xec5d3fa8ce427aff, 0xa3e51f138ab4cebe), // 1e127
    (0x93ba47c980e98cdf, 0xc66f336c36b10137), // 1e128
    (0xb8a8d9bbe123f017, 0xb80b0047445d4184), // 1e129
    (0xe6d3102ad96cec1d, 0xa60dc059157491e5), // 1e130
    (0x9043ea1ac7e41392, 0x87c89837ad68db2f), // 1e131
    (0xb454e4a179dd1877, 0x29babe4598c311fb), // 1e132
    (0xe16a1dc9d8545e94, 0xf4296dd6fef3d67a), // 1e133
    (0x8ce2529e2734bb1d, 0x1899e4a65f58660c), // 1e134
    (0xb01ae745b101e9e4, 0x5ec05dcff72e7f8f), // 1e135
    (0xdc21a1171d42645d, 0x76707543f4fa1f73), // 1e136
    (0x899504ae72497eba, 0x6a06494a791c53a8), // 1e137
    (0xabfa45da0edbde69, 0x0487db9d17636892), // 1e138
    (0xd6f8d7509292d603, 0x45a9d2845d3c42b6), // 1e139
    (0x865b86925b9bc5c2, 0x0b8a2392ba45a9b2), // 1e140
    (0xa7f26836f282b732, 0x8e6cac7768d7141e), // 1e141
    (0xd1ef0244af2364ff, 0x3207d795430cd926), // 1e142
    (0x8335616aed761f1f, 0x7f44e6bd49e807b8), // 1e143
    (0xa402b9c5a8d3a6e7, 0x5f16206c9c6209a6), // 1e144
    (0xcd036837130890a1, 0x36dba887c37a8c0f), // 1e145
    (0x802221226be55a64, 0xc2494954da2c9789), // 1e146
    (0xa02aa96b06deb0fd, 0xf2db9baa10b7bd6c), // 1e147
    (0xc83553c5c8965d3d, 0x6f92829494e5acc7), // 1e148
    (0xfa42a8b73abbf48c, 0xcb772339ba1f17f9), // 1e149
    (0x9c69a97284b578d7, 0xff2a760414536efb), // 1e150
    (0xc38413cf25e2d70d, 0xfef5138519684aba), // 1e151
    (0xf46518c2ef5b8cd1, 0x7eb258665fc25d69), // 1e152
    (0x98bf2f79d5993802, 0xef2f773ffbd97a61), // 1e153
    (0xbeeefb584aff8603, 0xaafb550ffacfd8fa), // 1e154
    (0xeeaaba2e5dbf6784, 0x95ba2a53f983cf38), // 1e155
    (0x952ab45cfa97a0b2, 0xdd945a747bf26183), // 1e156
    (0xba756174393d88df, 0x94f971119aeef9e4), // 1e157
    (0xe912b9d1478ceb17, 0x7a37cd5601aab85d), // 1e158
    (0x91abb422ccb812ee, 0xac62e055c10ab33a), // 1e159
    (0xb616a12b7fe617aa, 0x577b986b314d6009), // 1e160
    (0xe39c49765fdf9d94, 0xed5a7e85fda0b80b), // 1e161
    (0x8e41ade9fbebc27d, 0x14588f13be847307), // 1e162
    (0xb1d219647ae6b31c, 0x596eb2d8ae258fc8), // 1e163
    (0xde469fbd99a05fe3, 0x6fca5f8ed9aef3bb), // 1e164
    (0x8aec23d680043bee, 0x25de7bb9480d5854), // 1e165
    (0xada72ccc20054ae9, 0xaf561aa79a10ae6a), // 1e166
    (0xd910f7ff28069da4, 0x1b2ba1518094da04), // 1e167
    (0x87aa9aff79042286, 0x90fb44d2f05d0842), // 1e168
    (0xa99541bf57452b28, 0x353a1607ac744a53), // 1e169
    (0xd3fa922f2d1675f2, 0x42889b8997915ce8), // 1e170
    (0x847c9b5d7c2e09b7, 0x69956135febada11), // 1e171
    (0xa59bc234db398c25, 0x43fab9837e699095), // 1e172
    (0xcf02b2c21207ef2e, 0x94f967e45e03f4bb), // 1e173
    (0x8161afb94b44f57d, 0x1d1be0eebac278f5), // 1e174
    (0xa1ba1ba79e1632dc, 0x6462d92a69731732), // 1e175
    (0xca28a291859bbf93, 0x7d7b8f7503cfdcfe), // 1e176
    (0xfcb2cb35e702af78, 0x5cda735244c3d43e), // 1e177
    (0x9defbf01b061adab, 0x3a0888136afa64a7), // 1e178
    (0xc56baec21c7a1916, 0x088aaa1845b8fdd0), // 1e179
    (0xf6c69a72a3989f5b, 0x8aad549e57273d45), // 1e180
    (0x9a3c2087a63f6399, 0x36ac54e2f678864b), // 1e181
    (0xc0cb28a98fcf3c7f, 0x84576a1bb416a7dd), // 1e182
    (0xf0fdf2d3f3c30b9f, 0x656d44a2a11c51d5), // 1e183
    (0x969eb7c47859e743, 0x9f644ae5a4b1b325), // 1e184
    (0xbc4665b596706114, 0x873d5d9f0dde1fee), // 1e185
    (0xeb57ff22fc0c7959, 0xa90cb506d155a7ea), // 1e186
    (0x9316ff75dd87cbd8, 0x09a7f12442d588f2), // 1e187
    (0xb7dcbf5354e9bece, 0x0c11ed6d538aeb2f), // 1e188
    (0xe5d3ef282a242e81, 0x8f1668c8a86da5fa), // 1e189
    (0x8fa475791a569d10, 0xf96e017d694487bc), // 1e190
    (0xb38d92d760ec4455, 0x37c981dcc395a9ac), // 1e191
    (0xe070f78d3927556a, 0x85bbe253f47b1417), // 1e192
    (0x8c469ab843b89562, 0x93956d7478ccec8e), // 1e193
    (0xaf58416654a6babb, 0x387ac8d1970027b2), // 1e194
    (0xdb2e51bfe9d0696a, 0x06997b05fcc0319e), // 1e195
    (0x88fcf317f22241e2, 0x441fece3bdf81f03), // 1e196
    (0xab3c2fddeeaad25a, 0xd527e81cad7626c3), // 1e197
    (0xd60b3bd56a5586f1, 0x8a71e223d8d3b074), // 1e198
    (0x85c7056562757456, 0xf6872d5667844e49), // 1e199
    (0xa738c6bebb12d16c, 0xb428f8ac016561db), // 1e200
    (0xd106f86e69d785c7, 0xe13336d701beba52), // 1e201
    (0x82a45b450226b39c, 0xecc0024661173473), // 1e202
    (0xa34d721642b06084, 0x27f002d7f95d0190), // 1e203
    (0xcc20ce9bd35c78a5, 0x31ec038df7b441f4), // 1e204
    (0xff290242c83396ce, 0x7e67047175a15271), // 1e205
    (0x9f79a169bd203e41, 0x0f0062c6e984d386), // 1e206
    (0xc75809c42c684dd1, 0x52c07b78a3e60868), // 1e207
    (0xf92e0c3537826145, 0xa7709a56ccdf8a82), // 1e208
    (0x9bbcc7a142b17ccb, 0x88a66076400bb691), // 1e209
    (0xc2abf989935ddbfe, 0x6acff893d00ea435), // 1e210
    (0xf356f7ebf83552fe, 0x0583f6b8c4124d43), // 1e211
    (0x98165af37b2153de, 0xc3727a337a8b704a), // 1e212
    (0xbe1bf1b059e9a8d6, 0x744f18c0592e4c5c), // 1e213
    (0xeda2ee1c7064130c, 0x1162def06f79df73), // 1e214
    (0x9485d4d1c63e8be7, 0x8addcb5645ac2ba8), // 1e215
    (0xb9a74a0637ce2ee1, 0x6d953e2bd7173692), // 1e216
    (0xe8111c87c5c1ba99, 0xc8fa8db6ccdd0437), // 1e217
    (0x910ab1d4db9914a0, 0x1d9c9892400a22a2), // 1e218
    (0xb54d5e4a127f59c8, 0x2503beb6d00cab4b), // 1e219
    (0xe2a0b5dc971f303a, 0x2e44ae64840fd61d), // 1e220
    (0x8da471a9de737e24, 0x5ceaecfed289e5d2), // 1e221
    (0xb10d8e1456105dad, 0x7425a83e872c5f47), // 1e222
    (0xdd50f1996b947518, 0xd12f124e28f77719), // 1e223
    (0x8a5296ffe33cc92f, 0x82bd6b70d99aaa6f), // 1e224
    (0xace73cbfdc0bfb7b, 0x636cc64d1001550b), // 1e225
    (0xd8210befd30efa5a, 0x3c47f7e05401aa4e), // 1e226
    (0x8714a775e3e95c78, 0x65acfaec34810a71), // 1e227
    (0xa8d9d1535ce3b396, 0x7f1839a741a14d0d), // 1e228
    (0xd31045a8341ca07c, 0x1ede48111209a050), // 1e229
    (0x83ea2b892091e44d, 0x934aed0aab460432), // 1e230
    (0xa4e4b66b68b65d60, 0xf81da84d5617853f), // 1e231
    (0xce1de40642e3f4b9, 0x36251260ab9d668e), // 1e232
    (0x80d2ae83e9ce78f3, 0xc1d72b7c6b426019), // 1e233
    (0xa1075a24e4421730, 0xb24cf65b8612f81f), // 1e234
    (0xc94930ae1d529cfc, 0xdee033f26797b627), // 1e235
    (0xfb9b7cd9a4a7443c, 0x169840ef017da3b1), // 1e236
    (0x9d412e0806e88aa5, 0x8e1f289560ee864e), // 1e237
    (0xc491798a08a2ad4e, 0xf1a6f2bab92a27e2), // 1e238
    (0xf5b5d7ec8acb58a2, 0xae10af696774b1db), // 1e239
    (0x9991a6f3d6bf1765, 0xacca6da1e0a8ef29), // 1e240
    (0xbff610b0cc6edd3f, 0x17fd090a58d32af3), // 1e241
    (0xeff394dcff8a948e, 0xddfc4b4cef07f5b0), // 1e242
    (0x95f83d0a1fb69cd9, 0x4abdaf101564f98e), // 1e243
    (0xbb764c4ca7a4440f, 0x9d6d1ad41abe37f1), // 1e244
    (0xea53df5fd18d5513, 0x84c86189216dc5ed), // 1e245
    (0x92746b9be2f8552c, 0x32fd3cf5b4e49bb4), // 1e246
    (0xb7118682dbb66a77, 0x3fbc8c33221dc2a1), // 1e247
    (0xe4d5e82392a40515, 0x0fabaf3feaa5334a), // 1e248
    (0x8f05b1163ba6832d, 0x29cb4d87f2a7400e), // 1e249
    (0xb2c71d5bca9023f8, 0x743e20e9ef511012), // 1e250
    (0xdf78e4b2bd342cf6, 0x914da9246b255416), // 1e251
    (0x8bab8eefb6409c1a, 0x1ad089b6c2f7548e), // 1e252
    (0xae9672aba3d0c320, 0xa184ac2473b529b1), // 1e253
    (0xda3c0f568cc4f3e8, 0xc9e5d72d90a2741e), // 1e254
    (0x8865899617fb1871, 0x7e2fa67c7a658892), // 1e255
    (0xaa7eebfb9df9de8d, 0xddbb901b98feeab7), // 1e256
    (0xd51ea6fa85785631, 0x552a74227f3ea565), // 1e257
    (0x8533285c936b35de, 0xd53a88958f87275f), // 1e258
    (0xa67ff273b8460356, 0x8a892abaf368f137), // 1e259
    (0xd01fef10a657842c, 0x2d2b7569b0432d85), // 1e260
    (0x8213f56a67f6b29b, 0x9c3b29620e29fc73), // 1e261
    (0xa298f2c501f45f42, 0x8349f3ba91b47b8f), // 1e262
    (0xcb3f2f7642717713, 0x241c70a936219a73), // 1e263
    (0xfe0efb53d30dd4d7, 0xed238cd383aa0110), // 1e264
    (0x9ec95d1463e8a506, 0xf4363804324a40aa), // 1e265
    (0xc67bb4597ce2ce48, 0xb143c6053edcd0d5), // 1e266
    (0xf81aa16fdc1b81da, 0xdd94b7868e94050a), // 1e267
    (0x9b10a4e5e9913128, 0xca7cf2b4191c8326), // 1e268
    (0xc1d4ce1f63f57d72, 0xfd1c2f611f63a3f0), // 1e269
    (0xf24a01a73cf2dccf, 0xbc633b39673c8cec), // 1e270
    (0x976e41088617ca01, 0xd5be0503e085d813), // 1e271
    (0xbd49d14aa79dbc82, 0x4b2d8644d8a74e18), // 1e272
    (0xec9c459d51852ba2, 0xddf8e7d60ed1219e), // 1e273
    (0x93e1ab8252f33b45, 0xcabb90e5c942b503), // 1e274
    (0xb8da1662e7b00a17, 0x3d6a751f3b936243), // 1e275
    (0xe7109bfba19c0c9d, 0x0cc512670a783ad4), // 1e276
    (0x906a617d450187e2, 0x27fb2b80668b24c5), // 1e277
    (0xb484f9dc9641e9da, 0xb1f9f660802dedf6), // 1e278
    (0xe1a63853bbd26451, 0x5e7873f8a0396973), // 1e279
    (0x8d07e33455637eb2, 0xdb0b487b6423e1e8), // 1e280
    (0xb049dc016abc5e5f, 0x91ce1a9a3d2cda62), // 1e281
    (0xdc5c5301c56b75f7, 0x7641a140cc7810fb), // 1e282
    (0x89b9b3e11b6329ba, 0xa9e904c87fcb0a9d), // 1e283
    (0xac2820d9623bf429, 0x546345fa9fbdcd44), // 1e284
    (0xd732290fbacaf133, 0xa97c177947ad4095), // 1e285
    (0x867f59a9d4bed6c0, 0x49ed8eabcccc485d), // 1e286
    (0xa81f301449ee8c70, 0x5c68f256bfff5a74), // 1e287
    (0xd226fc195c6a2f8c, 0x73832eec6fff3111), // 1e288
    (0x83585d8fd9c25db7, 0xc831fd53c5ff7eab), // 1e289
    (0xa42e74f3d032f525, 0xba3e7ca8b77f5e55), // 1e290
    (0xcd3a1230c43fb26f, 0x28ce1bd2e55f35eb), // 1e291
    (0x80444b5e7aa7cf85, 0x7980d163cf5b81b3), // 1e292
    (0xa0555e361951c366, 0xd7e105bcc332621f), // 1e293
    (0xc86ab5c39fa63440, 0x8dd9472bf3fefaa7), // 1e294
    (0xfa856334878fc150, 0xb14f98f6f0feb951), // 1e295
    (0x9c935e00d4b9d8d2, 0x6ed1bf9a569f33d3), // 1e296
    (0xc3b8358109e84f07, 0x0a862f80ec4700c8), // 1e297
    (0xf4a642e14c6262c8, 0xcd27bb612758c0fa), // 1e298
    (0x98e7e9cccfbd7dbd, 0x8038d51cb897789c), // 1e299
    (0xbf21e44003acdd2c, 0xe0470a63e6bd56c3), // 1e300
    (0xeeea5d5004981478, 0x1858ccfce06cac74), // 1e301
    (0x95527a5202df0ccb, 0x0f37801e0c43ebc8), // 1e302
    (0xbaa718e68396cffd, 0xd30560258f54e6ba), // 1e303
    (0xe950df20247c83fd, 0x47c6b82ef32a2069), // 1e304
    (0x91d28b7416cdd27e, 0x4cdc331d57fa5441), // 1e305
    (0xb6472e511c81471d, 0xe0133fe4adf8e952), // 1e306
    (0xe3d8f9e563a198e5, 0x58180fddd97723a6), // 1e307
    (0x8e679c2f5e44ff8f, 0x570f09eaa7ea7648), // 1e308
    (0xb201833b35d63f73, 0x2cd2cc6551e513da), // 1e309
    (0xde81e40a034bcf4f, 0xf8077f7ea65e58d1), // 1e310
    (0x8b112e86420f6191, 0xfb04afaf27faf782), // 1e311
    (0xadd57a27d29339f6, 0x79c5db9af1f9b563), // 1e312
    (0xd94ad8b1c7380874, 0x18375281ae7822bc), // 1e313
    (0x87cec76f1c830548, 0x8f2293910d0b15b5), // 1e314
    (0xa9c2794ae3a3c69a, 0xb2eb3875504ddb22), // 1e315
    (0xd433179d9c8cb841, 0x5fa60692a46151eb), // 1e316
    (0x849feec281d7f328, 0xdbc7c41ba6bcd333), // 1e317
    (0xa5c7ea73224deff3, 0x12b9b522906c0800), // 1e318
    (0xcf39e50feae16bef, 0xd768226b34870a00), // 1e319
    (0x81842f29f2cce375, 0xe6a1158300d46640), // 1e320
    (0xa1e53af46f801c53, 0x60495ae3c1097fd0), // 1e321
    (0xca5e89b18b602368, 0x385bb19cb14bdfc4), // 1e322
    (0xfcf62c1dee382c42, 0x46729e03dd9ed7b5), // 1e323
    (0x9e19db92b4e31ba9, 0x6c07a2c26a8346d1), // 1e324
    (0xc5a05277621be293, 0xc7098b7305241885), // 1e325
    (0xf70867153aa2db38, 0xb8cbee4fc66d1ea7), // 1e326
    (0x9a65406d44a5c903, 0x737f74f1dc043328), // 1e327
    (0xc0fe908895cf3b44, 0x505f522e53053ff2), // 1e328
    (0xf13e34aabb430a15, 0x647726b9e7c68fef), // 1e329
    (0x96c6e0eab509e64d, 0x5eca783430dc19f5), // 1e330
    (0xbc789925624c5fe0, 0xb67d16413d132072), // 1e331
    (0xeb96bf6ebadf77d8, 0xe41c5bd18c57e88f), // 1e332
    (0x933e37a534cbaae7, 0x8e91b962f7b6f159), // 1e333
    (0xb80dc58e81fe95a1, 0x723627bbb5a4adb0), // 1e334
    (0xe61136f2227e3b09, 0xcec3b1aaa30dd91c), // 1e335
    (0x8fcac257558ee4e6, 0x213a4f0aa5e8a7b1), // 1e336
    (0xb3bd72ed2af29e1f, 0xa988e2cd4f62d19d), // 1e337
    (0xe0accfa875af45a7, 0x93eb1b80a33b8605), // 1e338
    (0x8c6c01c9498d8b88, 0xbc72f130660533c3), // 1e339
    (0xaf87023b9bf0ee6a, 0xeb8fad7c7f8680b4), // 1e340
    (0xdb68c2ca82ed2a05, 0xa67398db9f6820e1), // 1e341
    (0x892179be91d43a43, 0x88083f8943a1148c), // 1e342
    (0xab69d82e364948d4, 0x6a0a4f6b948959b0), // 1e343
    (0xd6444e39c3db9b09, 0x848ce34679abb01c), // 1e344
    (0x85eab0e41a6940e5, 0xf2d80e0c0c0b4e11), // 1e345
    (0xa7655d1d2103911f, 0x6f8e118f0f0e2195), // 1e346
    (0xd13eb46469447567, 0x4b7195f2d2d1a9fb), // 1e347
];

pub const POW5_INV_BITCOUNT: i32 = 122;
pub const POW5_BITCOUNT: i32 = 121;

/// `floor(2^k / 5^i) + 1` with `k = pow5bits(i) - 1 + POW5_INV_BITCOUNT`, stored as `(lo, hi)`.
#[rustfmt::skip]
pub static POW5_INV_SPLIT: [(u64, u64); 342] = [
    (0x0000000000000001, 0x0400000000000000),
    (0x3333333333333334, 0x0333333333333333),
    (0x28f5c28f5c28f5c3, 0x028f5c28f5c28f5c),
    (0xed916872b020c49c, 0x020c49ba5e353f7c),
    (0xaf4f0d844d013a93, 0x0346dc5d63886594),
    (0x8c3f3e0370cdc876, 0x029f16b11c6d1e10),
    (0xd698fe69270b06c5, 0x0218def416bdb1a6),
    (0xf0f4ca41d811a46e, 0x035afe535795e90a),
    (0xf3f70834acdae9f1, 0x02af31dc4611873b),
    (0x5cc5a02a23e254c1, 0x0225c17d04dad296),
    (0xfad5cd10396a2135, 0x036f9bfb3af7b756),
    (0xfbde3da69454e75e, 0x02bfaffc2f2c92ab),
    (0x2fe4fe1edd10b918, 0x0232f33025bd4223),
    (0x4ca19697c81ac1bf, 0x0384b84d092ed038),
    (0x3d4e1213067bce33, 0x02d09370d4257360),
    (0x643e74dc052fd829, 0x024075f3dceac2b3),
    (0x6d30baf9a1e626a7, 0x039a5652fb113785),
    (0x2426fbfae7eb5220, 0x02e1dea8c8da92d1),
    (0x1cebfcc8b9890e80, 0x024e4bba3a487574),
    (0x94acc7a78f41b0cc, 0x03b07929f6da5586),
    (0xaa23d2ec729af3d7, 0x02f394219248446b),
    (0xbb4fdbf05baf2979, 0x025c768141d369ef),
    (0xc54c931a2c4b758d, 0x03c7240202ebdcb2),
    (0x9dd6dc14f03c5e0b, 0x0305b66802564a28),
    (0x4b1249aa59c9e4d6, 0x026af8533511d4ed),
    (0x44ea0f76f60fd489, 0x03de5a1ebb4fbb15),
    (0x6a54d92bf80caa07, 0x0318481895d96277),
    (0x21dd7a89933d54d2, 0x0279d346de4781f9),
    (0x362f2a75b8622150, 0x03f61ed7ca0c0328),
    (0xf825bb91604e810d, 0x032b4bdfd4d668ec),
    (0xc684960de6a5340b, 0x0289097fdd7853f0),
    (0xd203ab3e521dc33c, 0x02073accb12d0ff3),
    (0xe99f7863b696052c, 0x033ec47ab514e652),
    (0x87b2c6b62bab3757, 0x02989d2ef743eb75),
    (0xd2f56bc4efbc2c45, 0x0213b0f25f69892a),
    (0x1e55793b192d13a2, 0x0352b4b6ff0f41de),
    (0x4b77942f475742e8, 0x02a8909265a5ce4b),
    (0xd5f9435905df68ba, 0x022073a8515171d5),
    (0x565b9ef4d6324129, 0x03671f73b54f1c89),
    (0xdeafb25d78283421, 0x02b8e5f62aa5b06d),
    (0x188c8eb12cecf681, 0x022d84c4eeeaf38b),
    (0x8dadb11b7b14bd9b, 0x037c07a17e44b8de),
    (0x7157c0e2c8dd647c, 0x02c99fb46503c718),
    (0x8ddfcd823a4ab6ca, 0x023ae629ea696c13),
    (0x1632e269f6ddf142, 0x0391704310a8acec),
    (0x44f581ee5f17f435, 0x02dac035a6ed5723),
    (0x372ace584c1329c4, 0x024899c4858aac1c),
    (0xbeaae3c079b842d3, 0x03a75c6da27779c6),
    (0x6555830061603576, 0x02ec49f14ec5fb05),
    (0xb7779c004de6912b, 0x0256a18dd89e626a),
    (0xf258f99a163db512, 0x03bdcf495a9703dd),
    (0x5b7a614811caf741, 0x02fe3f6de212697e),
    (0xaf951aa00e3bf901, 0x0264ff8b1b41edfe),
    (0x7f54f7667d2cc19b, 0x03d4cc11c5364997),
    (0x32aa5f8530f09ae3, 0x0310a3416a91d479),
    (0xf55519375a5a1582, 0x0273b5cdeedb1060),
    (0xbbbb5b8bc3c3559d, 0x03ec56164af81a34),
    (0x2fc916096969114a, 0x03237811d593482a),
    (0x596dab3ababa743c, 0x0282c674aadc39bb),
    (0x478aef622efb9030, 0x0202385d557cfafc),
    (0xd8de4bd04b2c19e6, 0x0336c0955594c4c6),
    (0xad7ea30d08f014b8, 0x029233aaaadd6a38),
    (0x24654f3da0c01093, 0x020e8fbbbbe454fa),
    (0x3a3bb1fc346680eb, 0x034a7f92c63a2190),
    (0x94fc8e635d1ecd89, 0x02a1ffa89e94e7a6),
    (0xaa63a51c4a7f0ad4, 0x021b32ed4baa52eb),
    (0xdd6c3b607731aaed, 0x035eb7e212aa1e45),
    (0x1789c919f8f488bd, 0x02b22cb4dbbb4b6b),
    (0xac6e3a7b2d906d64, 0x022823c3e2fc3c55),
    (0x13e390c515b3e23a, 0x03736c6c9e606089),
    (0xdcb60d6a77c31b62, 0x02c2bd23b1e6b3a0),
    (0x7d5e7121f968e2b5, 0x0235641c8e52294d),
    (0xc8971b698f0e3787, 0x0388a02db0837548),
    (0xa078e2bad8d82c6c, 0x02d3b357c0692aa0),
    (0xe6c71bc8ad79bd24, 0x0242f5dfcd20eee6),
    (0x0ad82c7448c2c839, 0x039e5632e1ce4b0b),
    (0x3be023903a356cfa, 0x02e511c24e3ea26f),
    (0x2fe682d9c82abd95, 0x0250db01d8321b8c),
    (0x4ca4048fa6aac8ee, 0x03b4919c8d1cf8e0),
    (0x3d5003a61eef0725, 0x02f6dae3a4172d80),
    (0x9773361e7f259f51, 0x025f1582e9ac2466),
    (0x8beb89ca6508fee8, 0x03cb559e42ad070a),
    (0x6fefa16eb73a6586, 0x0309114b688a6c08),
    (0xf3261abef8fb846b, 0x026da76f86d52339),
    (0x51d691318e5f3a45, 0x03e2a57f3e21d1f6),
    (0x0e4540f471e5c837, 0x031bb798fe8174c5),
    (0xd8376729f4b7d360, 0x027c92e0cb9ac3d0),
    (0xf38bd84321261eff, 0x03fa849adf5e061a),
    (0x293cad0280eb4bff, 0x032ed07be5e4d1af),
    (0xedca240200bc3ccc, 0x028bd9fcb7ea4158),
    (0xbe3b50019a3030a4, 0x02097b309321cde0),
    (0xc9f88002904d1a9f, 0x03425eb41e9c7c9a),
    (0x3b2d3335403daee6, 0x029b7ef67ee396e2),
    (0x95bdc291003158b8, 0x0215ff2b98b6124e),
    (0x892f9db4cd1bc126, 0x035665128df01d4a),
    (0x07594af70a7c9a85, 0x02ab840ed7f34aa2),
    (0x6c476f2c0863aed1, 0x0222d00bdff5d54e),
    (0x13a57eacda3917b4, 0x036ae67966562217),
    (0x0fb7988a482dac90, 0x02bbeb9451de81ac),
    (0xd95fad3b6cf156da, 0x022fefa9db1867bc),
    (0xf565e1f8ae4ef15c, 0x037fe5dc91c0a5fa),
    (0x911e4e608b725ab0, 0x02ccb7e3a7cd5195),
    (0xda7ea51a0928488d, 0x023d5fe9530aa7aa),
    (0xf7310829a8407415, 0x039566421e7772aa),
    (0x2c2739baed005cde, 0x02ddeb68185f8eef),
    (0xbcec2e2f24004a4b, 0x024b22b9ad193f25),
    (0x94ad16b1d333aa11, 0x03ab6ac2ae8ecb6f),
    (0xaa241227dc2954db, 0x02ef889bbed8a2bf),
    (0x54e9a81fe35443e2, 0x02593a163246e899),
    (0x2175d9cc9eed396a, 0x03c1f689ea0b0dc2),
    (0xe7917b0a18bdc788, 0x03019207ee6f3e34),
    (0xb9412f3b46fe393a, 0x0267a8065858fe90),
    (0xf535185ed7fd285c, 0x03d90cd6f3c1974d),
    (0xc42a79e57997537d, 0x03140a458fce12a4),
    (0x03552e512e12a931, 0x02766e9e0ca4dbb7),
    (0x9eeeb081e3510eb4, 0x03f0b0fce107c5f1),
    (0x4bf226ce4f740bc3, 0x0326f3fd80d304c1),
    (0xa3281f0b72c33c9c, 0x02858ffe00a8d09a),
    (0x1c2018d5f568fd4a, 0x020473319a20a6e2),
    (0xf9ccf48988a7fba9, 0x033a51e8f69aa49c),
    (0xfb0a5d3ad3b99621, 0x02950e53f87bb6e3),
    (0x2f3b7dc8a96144e7, 0x0210d8432d2fc583),
    (0xe52bfc7442353b0c, 0x034e26d1e1e608d1),
    (0xb756639034f76270, 0x02a4ebdb1b1e6d74),
    (0x2c451c735d92b526, 0x021d897c15b1f12a),
    (0x13a1c71efc1deea3, 0x0362759355e981dd),
    (0x761b05b2634b2550, 0x02b52adc44bace4a),
    (0x91af37c1e908eaa6, 0x022a88b036fbd83b),
    (0x82b1f2cfdb417770, 0x03774119f192f392),
    (0xcef4c23fe29ac5f3, 0x02c5cdae5adbf60e),
    (0x3f2a34ffe87bd190, 0x0237d7beaf165e72),
    (0x984387ffda5fb5b2, 0x038c8c644b56fd83),
    (0xe0360666484c915b, 0x02d6d6b6a2abfe02),
    (0x802b3851d3707449, 0x024578921bbccb35),
    (0x99dec082ebe72075, 0x03a25a835f947855),
    (0xae4bcd358985b391, 0x02e8486919439377),
    (0xbea30a913ad15c74, 0x02536d20e102dc5f),
    (0xfdd1aa81f7b560b9, 0x03b8ae9b019e2d65),
    (0x97daeece5fc44d61, 0x02fa2548ce182451),
    (0xdfe258a51969d781, 0x0261b76d71ace9da),
    (0x996a276e8f0fbf34, 0x03cf8be24f7b0fc4),
    (0xe121b9253f3fcc2a, 0x030c6fe83f95a636),
    (0xb41afa8432997022, 0x02705986994484f8),
    (0xecf7f739ea8f19cf, 0x03e6f5a4286da18d),
    (0x23f99294bba5ae40, 0x031f2ae9b9f14e0b),
    (0x4ffadbaa2fb7be99, 0x027f5587c7f43e6f),
    (0x7ff7c5dd1925fdc2, 0x03feef3fa6539718),
    (0xccc637e4141e649b, 0x033258ffb842df46),
    (0xd704f983434b83af, 0x028ead9960357f6b),
    (0x126a6135cf6f9c8c, 0x020bbe144cf79923),
    (0x83dd685618b29414, 0x0345fced47f28e9e),
    (0x9cb12044e08edcdd, 0x029e63f1065ba54b),
    (0x16f419d0b3a57d7d, 0x02184ff405161dd6),
    (0x8b20294dec3bfbfb, 0x035a19866e89c956),
    (0x3c19baa4bcfcc996, 0x02ae7ad1f207d445),
    (0xc9ae2eea30ca3adf, 0x02252f0e5b39769d),
    (0x0f7d17dd1add2afd, 0x036eb1b091f58a96),
    (0x3f97464a7be42264, 0x02bef48d41913bab),
    (0xcc790508631ce850, 0x02325d3dce0dc955),
    (0xe0c1a1a704fb0d4d, 0x0383c862e3494222),
    (0x4d67b4859d95a43e, 0x02cfd3824f6dce82),
    (0x711fc39e17aae9cb, 0x023fdc683f8b0b9b),
    (0xe832d2968c44a945, 0x039960a6cc11ac2b),
    (0xecf575453d03ba9e, 0x02e11a1f09a7bcef),
    (0x572ac4376402fbb1, 0x024dae7f3aec9726),
    (0x58446d256cd192b5, 0x03af7d985e47583d),
    (0x79d0575123dadbc4, 0x02f2cae04b6c4697),
    (0x94a6ac40e97be303, 0x025bd5803c569edf),
    (0x8771139b0f2c9e6c, 0x03c62266c6f0fe32),
    (0x9f8da948d8f07ebd, 0x0304e85238c0cb5b),
    (0xe60aedd3e0c06564, 0x026a5374fa33d5e2),
    (0xa344afb9679a3bd2, 0x03dd5254c3862304),
    (0xe903bfc78614fca8, 0x031775109c6b4f36),
    (0xba6966393810ca20, 0x02792a73b055d8f8),
    (0x2a423d2859b4769a, 0x03f510b91a22f4c1),
    (0xee9b642047c39215, 0x032a73c7481bf700),
    (0xbee2b680396941aa, 0x02885c9f6ce32c00),
    (0xff1bc53361210155, 0x0206b07f8a4f5666),
    (0x31c6085235019bbb, 0x033de73276e5570b),
    (0x27d1a041c4014963, 0x0297ec285f1ddf3c),
    (0xeca7b367d0010782, 0x021323537f4b18fc),
    (0xadd91f0c8001a59d, 0x0351d21f3211c194),
    (0xf17a7f3d3334847e, 0x02a7db4c280e3476),
    (0x279532975c2a0398, 0x021fe2a3533e905f),
    (0xd8eeb75893766c26, 0x0366376bb8641a31),
    (0x7a5892ad42c52352, 0x02b82c562d1ce1c1),
    (0xfb7a0ef102374f75, 0x022cf044f0e3e7cd),
    (0xc59017e8038bb254, 0x037b1a07e7d30c7c),
    (0x37a67986693c8eaa, 0x02c8e19feca8d6ca),
    (0xf951fad1edca0bbb, 0x023a4e198a20abd4),
    (0x28832ae97c76792b, 0x03907cf5a9cddfbb),
    (0x2068ef21305ec756, 0x02d9fd9154a4b2fc),
    (0x19ed8c1a8d189f78, 0x0247fe0ddd508f30),
    (0x5caf4690e1c0ff26, 0x03a66349621a7eb3),
    (0x4a25d20d81673285, 0x02eb82a11b48655c),
    (0x3b5174d79ab8f537, 0x0256021a7c39eab0),
    (0x921bee25c45b21f1, 0x03bcd02a605caab3),
    (0xdb498b5169e2818e, 0x02fd735519e3bbc2),
    (0x15d46f7454b53472, 0x02645c4414b62fcf),
    (0xefba4bed545520b6, 0x03d3c6d35456b2e4),
    (0xf2fb6ff110441a2b, 0x030fd242a9def583),
    (0x8f2f8cc0d9d014ef, 0x02730e9bbb18c469),
    (0xb1e5ae015c80217f, 0x03eb4a92c4f46d75),
    (0xc1848b344a001acc, 0x0322a20f03f6bdf7),
    (0xce03a2903b3348a3, 0x02821b3f365efe5f),
    (0xd802e873628f6d4f, 0x0201af65c518cb7f),
    (0x599e40b89db2487f, 0x0335e56fa1c14599),
    (0xe14b66fa17c1d399, 0x029184594e3437ad),
    (0x81091f2e7967dc7a, 0x020e037aa4f692f1),
    (0x9b41cb7d8f0c93f6, 0x03499f2aa18a84b5),
    (0xaf67d5fe0c0a0ff8, 0x02a14c221ad536f7),
    (0xf2b977fe70080cc7, 0x021aa34e7bddc592),
    (0x1df58cca4cd9ae0b, 0x035dd2172c9608eb),
    (0xe4c470a1d7148b3c, 0x02b174df56de6d88),
    (0x83d05a1b1276d5ca, 0x022790b2abe5246d),
    (0x9fb3c35e83f1560f, 0x0372811ddfd50715),
    (0xb2f635e5365aab3f, 0x02c200e4b310d277),
    (0xf591c4b75eaeef66, 0x0234cd83c273db92),
    (0xef4fa125644b18a3, 0x0387af39371fc5b7),
    (0x8c3fb41de9d5ad4f, 0x02d2f2942c196af9),
    (0x3cffc34b2177bdd9, 0x02425ba9bce12261),
    (0x94cc6bab68bf9628, 0x039d5f75fb01d09b),
    (0x10a38955ed6611b9, 0x02e44c5e6267da16),
    (0xda1c6dde5784dafb, 0x02503d184eb97b44),
    (0xf693e2fd58d49191, 0x03b394f3b128c53a),
    (0xc5431bfde0aa0e0e, 0x02f610c2f4209dc8),
    (0x6a9c1664b3bb3e72, 0x025e73cf29b3b16d),
    (0x10f9bd6dec5eca4f, 0x03ca52e50f85e8af),
    (0xda616457f04bd50c, 0x03084250d937ed58),
    (0xe1e783798d09773d, 0x026d01da475ff113),
    (0x030c058f480f252e, 0x03e19c9072331b53),
    (0x68d66ad906728425, 0x031ae3a6c1c27c42),
    (0x8711ef14052869b7, 0x027be952349b969b),
    (0x0b4fe4ecd50d75f2, 0x03f97550542c242c),
    (0xa2a650bd773df7f5, 0x032df7737689b689),
    (0xb551da312c31932a, 0x028b2c5c5ed49207),
    (0x5ddb14f4235adc22, 0x0208f049e576db39),
    (0x2fc4ee536bc49369, 0x034180763bf15ec2),
    (0xbfd0bea92303a921, 0x029acd2b63277f01),
    (0x9973cbba8269541a, 0x021570ef8285ff34),
    (0x5bec792a6a42202a, 0x0355817f373ccb87),
    (0xe3239421ee9b4cef, 0x02aacdff5f63d605),
    (0xb5b6101b25490a59, 0x02223e65e5e97804),
    (0x22bce691d541aa27, 0x0369fd6fd64259a1),
    (0xb563eba7ddce21b9, 0x02bb31264501e14d),
    (0xf78322ecb171b494, 0x022f5a850401810a),
    (0x259e9e47824f8753, 0x037ef73b399c01ab),
    (0x1e187e9f9b72d2a9, 0x02cbf8fc2e1667bc),
    (0x4b46cbb2e2c24221, 0x023cc73024deb963),
    (0x120adf849e039d01, 0x039471e6a1645bd2),
    (0xdb3be603b19c7d9a, 0x02dd27ebb4504974),
    (0x7c2feb3627b0647c, 0x024a865629d9d45d),
    (0x2d197856a5e7072c, 0x03aa7089dc8fba2f),
    (0x8a7ac6abb7ec05bd, 0x02eec06e4a0c94f2),
    (0xd52f05562cbcd164, 0x025899f1d4d6dd8e),
    (0x21e4d556adfae8a0, 0x03c0f64fbaf1627e),
    (0xe7ea444557fbed4d, 0x0300c50c958de864),
    (0xecbb69d1132ff10a, 0x0267040a113e5383),
    (0xadf8a94e851981aa, 0x03d8067681fd526c),
    (0x8b2d543ed0e13488, 0x0313385ece6441f0),
    (0xd5bddcff0d80f6d3, 0x0275c6b23eb69b26),
    (0x892fc7fe7c018aeb, 0x03efa45064575ea4),
    (0x3a8c9ffec99ad589, 0x03261d0d1d12b21d),
    (0xc8707fff07af113b, 0x0284e40a7da88e7d),
    (0x39f39998d2f2742f, 0x0203e9a1fe2071fe),
    (0x8fec28f484b7204b, 0x033975cffd00b663),
    (0xd989ba5d36f8e6a2, 0x02945e3ffd9a2b82),
    (0x47a161e42bfa521c, 0x02104b66647b5602),
    (0x0c35696d132a1cf9, 0x034d4570a0c5566a),
    (0x09c454574288172d, 0x02a4378d4d6aab88),
    (0xa169dd129ba0128b, 0x021cf93dd7888939),
    (0x0242fb50f9001dab, 0x03618ec958da7529),
    (0x9b68c90d940017bc, 0x02b4723aad7b90ed),
    (0x4920a0d7a999ac96, 0x0229f4fbbdfc73f1),
    (0x750101590f5c4757, 0x037654c5fcc71fe8),
    (0x2a6734473f7d05df, 0x02c5109e63d27fed),
    (0xeeb8f69f65fd9e4c, 0x0237407eb641fff0),
    (0xe45b24323cc8fd46, 0x038b9a6456cfffe7),
    (0xb6af502830a0ca9f, 0x02d6151d123fffec),
    (0xf88c402026e7087f, 0x0244ddb0db666656),
    (0x2746cd003e3e73fe, 0x03a162b4923d708b),
    (0x1f6bd73364fec332, 0x02e7822a0e978d3c),
    (0xe5efdf5c50cbcf5b, 0x0252ce880bac70fc),
    (0x3cb2fefa1adfb22b, 0x03b7b0d9ac471b2e),
    (0x308f3261af195b56, 0x02f95a47bd05af58),
    (0x5a0c284e25ade2ab, 0x0261150630d15913),
    (0x29ad0d49d5e30445, 0x03ce8809e7b55b52),
    (0x548a7107de4f369d, 0x030ba007ec9115db),
    (0xdd3b8d9fe50c2bb1, 0x026fb3398a0dab15),
    (0x952c15cca1ad12b5, 0x03e5eb8f434911bc),
    (0x775677d6e7bda891, 0x031e560c35d40e30),
    (0xc5dec645863153a7, 0x027eab3cf7dcd826),
    (0x3c97a3a2704eec3e, 0x03fddec7f2faf371),
    (0x30794fb526a589cc, 0x03317f065bfbf5f4),
    (0xf3943fc41eead4a3, 0x028dff3849965e5c),
    (0x294366367f2243b6, 0x020b32936e11e517),
    (0xa86bd6bd9836d2bc, 0x03451db8b01ca1be),
    (0x86bcabcae02bdbca, 0x029db1608ce3b498),
    (0x3896efd58023163b, 0x0217c11a0a4fc3ad),
    (0xf424b2ef336b56c5, 0x035934f676e605e1),
    (0x29b6f58c2922abd1, 0x02adc3f85f1e6b1b),
    (0xbaf8c47020e88974, 0x02249cc6b27ebc15),
    (0x2b27a0b367da7586, 0x036dc7a450cac689),
    (0xbc1fb3c2b97b9138, 0x02be395040a2386d),
    (0x967fc3022dfc742d, 0x0231c77366e82d24),
    (0xf0cc6b36affa537b, 0x0382d8b8a4a6aea0),
    (0x5a3d22922661dc62, 0x02cf13c6ea1ef21a),
    (0xae974edb51e7e382, 0x023f43058818c1ae),
    (0x7dbee4921ca638cf, 0x03986b3c0cf46917),
    (0x316583a816eb60a6, 0x02e055c9a3f6ba79),
    (0x8deacfb9abef8085, 0x024d116e1cc561fa),
    (0xafde19291318cda1, 0x03ae8249c7a2365d),
    (0xf3181420dc13d7b4, 0x02f201d49fb4f84a),
    (0x28e0101a49a9795d, 0x025b34aa195d936f),
    (0xdb0019c3a90f2895, 0x03c521102895b8b1),
    (0xe2667b02eda5ba11, 0x03041a7353aafa27),
    (0xb51ec8cf248494da, 0x0269aec2a95594ec),
    (0xee97a7b1d4075490, 0x03dc4ad10eef54ad),
    (0x8bac8627dcd2aa0d, 0x0316a240d8bf76f1),
    (0x0956d1b97d7554d7, 0x027881cd7a32c58e),
    (0x422482c26255548b, 0x03f402e25d1e08e3),
    (0x9b50689b81dddd3c, 0x03299be84a7e6d82),
    (0x7c4053af9b17e430, 0x0287afed08652468),
    (0xc9cd0fbfaf465027, 0x0206265739ea8386),
    (0xa9481932b20a19d7, 0x033d0a25297738d7),
    (0x21067a8ef4d4e179, 0x02973b50edf8fa46),
    (0xb4052ed8c3dd812e, 0x021295da57fa61d1),
    (0x20084af46c959b7c, 0x0350efc3bff702e9),
    (0x19a03bf6bd447c64, 0x02a72636332c0254),
    (0xae19c992310396b6, 0x021f51c4f5bccea9),
    (0xe35c75b6b4d28abd, 0x03654fa1892e1775),
    (0x4f7d2af890a86efd, 0x02b772e7a0f1ac5e),
    (0xd930ef2d4086bf31, 0x022c5bec80c156b1),
    (0x8eb4b1e200d7984f, 0x037a2cad9acef11c),
    (0x3ef6f4b4cd7946a5, 0x02c823be15725a7d),
    (0xcbf8c3c3d7943884, 0x0239b631aac1e1fd),
    (0xdff46c6c8c205a6d, 0x038f89e911363662),
    (0xe65d238a09b37b8b, 0x02d93b20da91c51b),
    (0x51e41c6e6e292fa2, 0x02476280aedb0416),
    (0x4fd360b0b041e5d0, 0x03a56a677e2b39bd),
    (0xd975e6f3c034b7da, 0x02eabb85fe88fafd),
    (0xe12b1f2966909315, 0x025562d1986d9597),
];

/// `5^i` normalized to `POW5_BITCOUNT` bits, stored as `(lo, hi)`.
#[rustfmt::skip]
pub static POW5_SPLIT: [(u64, u64); 326] = [
    (0x0000000000000000, 0x0100000000000000),
    (0x0000000000000000, 0x0140000000000000),
    (0x0000000000000000, 0x0190000000000000),
    (0x0000000000000000, 0x01f4000000000000),
    (0x0000000000000000, 0x0138800000000000),
    (0x0000000000000000, 0x0186a00000000000),
    (0x0000000000000000, 0x01e8480000000000),
    (0x0000000000000000, 0x01312d0000000000),
    (0x0000000000000000, 0x017d784000000000),
    (0x0000000000000000, 0x01dcd65000000000),
    (0x0000000000000000, 0x012a05f200000000),
    (0x0000000000000000, 0x0174876e80000000),
    (0x0000000000000000, 0x01d1a94a20000000),
    (0x0000000000000000, 0x012309ce54000000),
    (0x0000000000000000, 0x016bcc41e9000000),
    (0x0000000000000000, 0x01c6bf5263400000),
    (0x0000000000000000, 0x011c37937e080000),
    (0x0000000000000000, 0x016345785d8a0000),
    (0x0000000000000000, 0x01bc16d674ec8000),
    (0x0000000000000000, 0x01158e460913d000),
    (0x0000000000000000, 0x015af1d78b58c400),
    (0x0000000000000000, 0x01b1ae4d6e2ef500),
    (0x0000000000000000, 0x010f0cf064dd5920),
    (0x0000000000000000, 0x0152d02c7e14af68),
    (0x0000000000000000, 0x01a784379d99db42),
    (0x4000000000000000, 0x0108b2a2c2802909),
    (0x9000000000000000, 0x014adf4b7320334b),
    (0x7400000000000000, 0x019d971e4fe8401e),
    (0x0880000000000000, 0x01027e72f1f12813),
    (0xcaa0000000000000, 0x01431e0fae6d7217),
    (0xbd48000000000000, 0x0193e5939a08ce9d),
    (0x2c9a000000000000, 0x01f8def8808b0245),
    (0x3be0400000000000, 0x013b8b5b5056e16b),
    (0x0ad8500000000000, 0x018a6e32246c99c6),
    (0x8d8e640000000000, 0x01ed09bead87c037),
    (0xb878fe8000000000, 0x013426172c74d822),
    (0x66973e2000000000, 0x01812f9cf7920e2b),
    (0x403d0da800000000, 0x01e17b84357691b6),
    (0xe826288900000000, 0x012ced32a16a1b11),
    (0x622fb2ab40000000, 0x0178287f49c4a1d6),
    (0xfabb9f5610000000, 0x01d6329f1c35ca4b),
    (0x7cb54395ca000000, 0x0125dfa371a19e6f),
    (0x5be2947b3c800000, 0x016f578c4e0a060b),
    (0x32db399a0ba00000, 0x01cb2d6f618c878e),
    (0xdfc9040047440000, 0x011efc659cf7d4b8),
    (0x17bb450059150000, 0x0166bb7f0435c9e7),
    (0xddaa16406f5a4000, 0x01c06a5ec5433c60),
    (0x8a8a4de845986800, 0x0118427b3b4a05bc),
    (0xad2ce16256fe8200, 0x015e531a0a1c872b),
    (0x987819baecbe2280, 0x01b5e7e08ca3a8f6),
    (0x1f4b1014d3f6d590, 0x0111b0ec57e6499a),
    (0xa71dd41a08f48af4, 0x01561d276ddfdc00),
    (0xd0e549208b31adb1, 0x01aba4714957d300),
    (0x828f4db456ff0c8e, 0x010b46c6cdd6e3e0),
    (0xa33321216cbecfb2, 0x014e1878814c9cd8),
    (0xcbffe969c7ee839e, 0x01a19e96a19fc40e),
    (0x3f7ff1e21cf51243, 0x0105031e2503da89),
    (0x8f5fee5aa43256d4, 0x014643e5ae44d12b),
    (0x7337e9f14d3eec89, 0x0197d4df19d60576),
    (0x1005e46da08ea7ab, 0x01fdca16e04b86d4),
    (0x8a03aec4845928cb, 0x013e9e4e4c2f3444),
    (0xac849a75a56f72fd, 0x018e45e1df3b0155),
    (0x17a5c1130ecb4fbd, 0x01f1d75a5709c1ab),
    (0xeec798abe93f11d6, 0x013726987666190a),
    (0xaa797ed6e38ed64b, 0x0184f03e93ff9f4d),
    (0x1517de8c9c728bde, 0x01e62c4e38ff8721),
    (0xad2eeb17e1c7976b, 0x012fdbb0e39fb474),
    (0xd87aa5ddda397d46, 0x017bd29d1c87a191),
    (0x4e994f5550c7dc97, 0x01dac74463a989f6),
    (0xf11fd195527ce9de, 0x0128bc8abe49f639),
    (0x6d67c5faa71c2456, 0x0172ebad6ddc73c8),
    (0x88c1b77950e32d6c, 0x01cfa698c95390ba),
    (0x957912abd28dfc63, 0x0121c81f7dd43a74),
    (0xbad75756c7317b7c, 0x016a3a275d494911),
    (0x298d2d2c78fdda5b, 0x01c4c8b1349b9b56),
    (0xd9f83c3bcb9ea879, 0x011afd6ec0e14115),
    (0x50764b4abe865297, 0x0161bcca7119915b),
    (0x2493de1d6e27e73d, 0x01ba2bfd0d5ff5b2),
    (0x56dc6ad264d8f086, 0x01145b7e285bf98f),
    (0x2c938586fe0f2ca8, 0x0159725db272f7f3),
    (0xf7b866e8bd92f7d2, 0x01afcef51f0fb5ef),
    (0xfad34051767bdae3, 0x010de1593369d1b5),
    (0x79881065d41ad19c, 0x015159af80444623),
    (0x57ea147f49218603, 0x01a5b01b605557ac),
    (0xb6f24ccf8db4f3c1, 0x01078e111c3556cb),
    (0xa4aee003712230b2, 0x014971956342ac7e),
    (0x4dda98044d6abcdf, 0x019bcdfabc13579e),
    (0xf0a89f02b062b60b, 0x010160bcb58c16c2),
    (0xacd2c6c35c7b638e, 0x0141b8ebe2ef1c73),
    (0x98077874339a3c71, 0x01922726dbaae390),
    (0xbe0956914080cb8e, 0x01f6b0f092959c74),
    (0xf6c5d61ac8507f38, 0x013a2e965b9d81c8),
    (0x34774ba17a649f07, 0x0188ba3bf284e23b),
    (0x01951e89d8fdc6c8, 0x01eae8caef261aca),
    (0x40fd3316279e9c3d, 0x0132d17ed577d0be),
    (0xd13c7fdbb186434c, 0x017f85de8ad5c4ed),
    (0x458b9fd29de7d420, 0x01df67562d8b3629),
    (0xcb7743e3a2b0e494, 0x012ba095dc7701d9),
    (0x3e5514dc8b5d1db9, 0x017688bb5394c250),
    (0x4dea5a13ae346527, 0x01d42aea2879f2e4),
    (0xb0b2784c4ce0bf38, 0x01249ad2594c37ce),
    (0x5cdf165f6018ef06, 0x016dc186ef9f45c2),
    (0xf416dbf7381f2ac8, 0x01c931e8ab871732),
    (0xd88e497a83137abd, 0x011dbf316b346e7f),
    (0xceb1dbd923d8596c, 0x01652efdc6018a1f),
    (0xc25e52cf6cce6fc7, 0x01be7abd3781eca7),
    (0xd97af3c1a40105dc, 0x01170cb642b133e8),
    (0x0fd9b0b20d014754, 0x015ccfe3d35d80e3),
    (0xd3d01cde90419929, 0x01b403dcc834e11b),
    (0x6462120b1a28ffb9, 0x01108269fd210cb1),
    (0xbd7a968de0b33fa8, 0x0154a3047c694fdd),
    (0x2cd93c3158e00f92, 0x01a9cbc59b83a3d5),
    (0x3c07c59ed78c09bb, 0x010a1f5b81324665),
    (0x8b09b7068d6f0c2a, 0x014ca732617ed7fe),
    (0x2dcc24c830cacf34, 0x019fd0fef9de8dfe),
    (0xdc9f96fd1e7ec180, 0x0103e29f5c2b18be),
    (0x93c77cbc661e71e1, 0x0144db473335deee),
    (0x38b95beb7fa60e59, 0x01961219000356aa),
    (0xc6e7b2e65f8f91ef, 0x01fb969f40042c54),
    (0xfc50cfcffbb9bb35, 0x013d3e2388029bb4),
    (0x3b6503c3faa82a03, 0x018c8dac6a0342a2),
    (0xca3e44b4f9523484, 0x01efb1178484134a),
    (0xbe66eaf11bd360d2, 0x0135ceaeb2d28c0e),
    (0x6e00a5ad62c83907, 0x0183425a5f872f12),
    (0x0980cf18bb7a4749, 0x01e412f0f768fad7),
    (0x65f0816f752c6c8d, 0x012e8bd69aa19cc6),
    (0xff6ca1cb527787b1, 0x017a2ecc414a03f7),
    (0xff47ca3e2715699d, 0x01d8ba7f519c84f5),
    (0xbf8cde66d86d6202, 0x0127748f9301d319),
    (0x2f7016008e88ba83, 0x017151b377c247e0),
    (0x3b4c1b80b22ae923, 0x01cda62055b2d9d8),
    (0x250f91306f5ad1b6, 0x012087d4358fc827),
    (0xee53757c8b318623, 0x0168a9c942f3ba30),
    (0x29e852dbadfde7ac, 0x01c2d43b93b0a8bd),
    (0x3a3133c94cbeb0cc, 0x0119c4a53c4e6976),
    (0xc8bd80bb9fee5cff, 0x016035ce8b6203d3),
    (0xbaece0ea87e9f43e, 0x01b843422e3a84c8),
    (0x74d40c9294f238a7, 0x01132a095ce492fd),
    (0xd2090fb73a2ec6d1, 0x0157f48bb41db7bc),
    (0x068b53a508ba7885, 0x01adf1aea12525ac),
    (0x8417144725748b53, 0x010cb70d24b7378b),
    (0x651cd958eed1ae28, 0x014fe4d06de5056e),
    (0xfe640faf2a8619b2, 0x01a3de04895e46c9),
    (0x3efe89cd7a93d00f, 0x01066ac2d5daec3e),
    (0xcebe2c40d938c413, 0x014805738b51a74d),
    (0x426db7510f86f518, 0x019a06d06e261121),
    (0xc9849292a9b4592f, 0x0100444244d7cab4),
    (0xfbe5b73754216f7a, 0x01405552d60dbd61),
    (0x7adf25052929cb59, 0x01906aa78b912cba),
    (0x1996ee4673743e2f, 0x01f485516e7577e9),
    (0xaffe54ec0828a6dd, 0x0138d352e5096af1),
    (0x1bfdea270a32d095, 0x018708279e4bc5ae),
    (0xa2fd64b0ccbf84ba, 0x01e8ca3185deb719),
    (0x05de5eee7ff7b2f4, 0x01317e5ef3ab3270),
    (0x0755f6aa1ff59fb1, 0x017dddf6b095ff0c),
    (0x092b7454a7f3079e, 0x01dd55745cbb7ecf),
    (0x65bb28b4e8f7e4c3, 0x012a5568b9f52f41),
    (0xbf29f2e22335ddf3, 0x0174eac2e8727b11),
    (0x2ef46f9aac035570, 0x01d22573a28f19d6),
    (0xdd58c5c0ab821566, 0x0123576845997025),
    (0x54aef730d6629ac0, 0x016c2d4256ffcc2f),
    (0x29dab4fd0bfb4170, 0x01c73892ecbfbf3b),
    (0xfa28b11e277d08e6, 0x011c835bd3f7d784),
    (0x38b2dd65b15c4b1f, 0x0163a432c8f5cd66),
    (0xc6df94bf1db35de7, 0x01bc8d3f7b3340bf),
    (0xdc4bbcf772901ab0, 0x0115d847ad000877),
    (0xd35eac354f34215c, 0x015b4e5998400a95),
    (0x48365742a30129b4, 0x01b221effe500d3b),
    (0x0d21f689a5e0ba10, 0x010f5535fef20845),
    (0x506a742c0f58e894, 0x01532a837eae8a56),
    (0xe4851137132f22b9, 0x01a7f5245e5a2ceb),
    (0x6ed32ac26bfd75b4, 0x0108f936baf85c13),
    (0x4a87f57306fcd321, 0x014b378469b67318),
    (0x5d29f2cfc8bc07e9, 0x019e056584240fde),
    (0xfa3a37c1dd7584f1, 0x0102c35f729689ea),
    (0xb8c8c5b254d2e62e, 0x014374374f3c2c65),
    (0x26faf71eea079fb9, 0x01945145230b377f),
    (0xf0b9b4e6a48987a8, 0x01f965966bce055e),
    (0x5674111026d5f4c9, 0x013bdf7e0360c35b),
    (0x2c111554308b71fb, 0x018ad75d8438f432),
    (0xb7155aa93cae4e7a, 0x01ed8d34e547313e),
    (0x326d58a9c5ecf10c, 0x013478410f4c7ec7),
    (0xff08aed437682d4f, 0x01819651531f9e78),
    (0x3ecada89454238a3, 0x01e1fbe5a7e78617),
    (0x873ec895cb496366, 0x012d3d6f88f0b3ce),
    (0x290e7abb3e1bbc3f, 0x01788ccb6b2ce0c2),
    (0xb352196a0da2ab4f, 0x01d6affe45f818f2),
    (0xb0134fe24885ab11, 0x01262dfeebbb0f97),
    (0x9c1823dadaa715d6, 0x016fb97ea6a9d37d),
    (0x031e2cd19150db4b, 0x01cba7de5054485d),
    (0x21f2dc02fad2890f, 0x011f48eaf234ad3a),
    (0xaa6f9303b9872b53, 0x01671b25aec1d888),
    (0xd50b77c4a7e8f628, 0x01c0e1ef1a724eaa),
    (0xc5272adae8f199d9, 0x01188d357087712a),
    (0x7670f591a32e004f, 0x015eb082cca94d75),
    (0xd40d32f60bf98063, 0x01b65ca37fd3a0d2),
    (0xc4883fd9c77bf03e, 0x0111f9e62fe44483),
    (0xb5aa4fd0395aec4d, 0x0156785fbbdd55a4),
    (0xe314e3c447b1a760, 0x01ac1677aad4ab0d),
    (0xaded0e5aaccf089c, 0x010b8e0acac4eae8),
    (0xd96851f15802cac3, 0x014e718d7d7625a2),
    (0x8fc2666dae037d74, 0x01a20df0dcd3af0b),
    (0x39d980048cc22e68, 0x010548b68a044d67),
    (0x084fe005aff2ba03, 0x01469ae42c8560c1),
    (0x4a63d8071bef6883, 0x0198419d37a6b8f1),
    (0x9cfcce08e2eb42a4, 0x01fe52048590672d),
    (0x821e00c58dd309a7, 0x013ef342d37a407c),
    (0xa2a580f6f147cc10, 0x018eb0138858d09b),
    (0x8b4ee134ad99bf15, 0x01f25c186a6f04c2),
    (0x97114cc0ec80176d, 0x0137798f428562f9),
    (0xfcd59ff127a01d48, 0x018557f31326bbb7),
    (0xfc0b07ed7188249a, 0x01e6adefd7f06aa5),
    (0xbd86e4f466f516e0, 0x01302cb5e6f642a7),
    (0xace89e3180b25c98, 0x017c37e360b3d351),
    (0x1822c5bde0def3be, 0x01db45dc38e0c826),
    (0xcf15bb96ac8b5857, 0x01290ba9a38c7d17),
    (0xc2db2a7c57ae2e6d, 0x01734e940c6f9c5d),
    (0x3391f51b6d99ba08, 0x01d022390f8b8375),
    (0x403b393124801445, 0x01221563a9b73229),
    (0x904a077d6da01956, 0x016a9abc9424feb3),
    (0x745c895cc9081fac, 0x01c5416bb92e3e60),
    (0x48b9d5d9fda513cb, 0x011b48e353bce6fc),
    (0x5ae84b507d0e58be, 0x01621b1c28ac20bb),
    (0x31a25e249c51eeee, 0x01baa1e332d728ea),
    (0x5f057ad6e1b33554, 0x0114a52dffc67992),
    (0xf6c6d98c9a2002aa, 0x0159ce797fb817f6),
    (0xb4788fefc0a80354, 0x01b04217dfa61df4),
    (0xf0cb59f5d8690214, 0x010e294eebc7d2b8),
    (0x2cfe30734e83429a, 0x0151b3a2a6b9c767),
    (0xf83dbc9022241340, 0x01a6208b50683940),
    (0x9b2695da15568c08, 0x0107d457124123c8),
    (0xc1f03b509aac2f0a, 0x0149c96cd6d16cba),
    (0x726c4a24c1573acd, 0x019c3bc80c85c7e9),
    (0xe783ae56f8d684c0, 0x0101a55d07d39cf1),
    (0x616499ecb70c25f0, 0x01420eb449c8842e),
    (0xf9bdc067e4cf2f6c, 0x019292615c3aa539),
    (0x782d3081de02fb47, 0x01f736f9b3494e88),
    (0x4b1c3e512ac1dd0c, 0x013a825c100dd115),
    (0x9de34de57572544f, 0x018922f31411455a),
    (0x455c215ed2cee963, 0x01eb6bafd91596b1),
    (0xcb5994db43c151de, 0x0133234de7ad7e2e),
    (0x7e2ffa1214b1a655, 0x017fec216198ddba),
    (0x1dbbf89699de0feb, 0x01dfe729b9ff1529),
    (0xb2957b5e202ac9f3, 0x012bf07a143f6d39),
    (0x1f3ada35a8357c6f, 0x0176ec98994f4888),
    (0x270990c31242db8b, 0x01d4a7bebfa31aaa),
    (0x5865fa79eb69c937, 0x0124e8d737c5f0aa),
    (0xee7f791866443b85, 0x016e230d05b76cd4),
    (0x2a1f575e7fd54a66, 0x01c9abd04725480a),
    (0x5a53969b0fe54e80, 0x011e0b622c774d06),
    (0xf0e87c41d3dea220, 0x01658e3ab7952047),
    (0xed229b5248d64aa8, 0x01bef1c9657a6859),
    (0x3435a1136d85eea9, 0x0117571ddf6c8138),
    (0x4143095848e76a53, 0x015d2ce55747a186),
    (0xd193cbae5b2144e8, 0x01b4781ead1989e7),
    (0xe2fc5f4cf8f4cb11, 0x0110cb132c2ff630),
    (0x1bbb77203731fdd5, 0x0154fdd7f73bf3bd),
    (0x62aa54e844fe7d4a, 0x01aa3d4df50af0ac),
    (0xbdaa75112b1f0e4e, 0x010a6650b926d66b),
    (0xad15125575e6d1e2, 0x014cffe4e7708c06),
    (0x585a56ead360865b, 0x01a03fde214caf08),
    (0x37387652c41c53f8, 0x010427ead4cfed65),
    (0x850693e7752368f7, 0x014531e58a03e8be),
    (0x264838e1526c4334, 0x01967e5eec84e2ee),
    (0xafda4719a7075402, 0x01fc1df6a7a61ba9),
    (0x0de86c7008649481, 0x013d92ba28c7d14a),
    (0x9162878c0a7db9a1, 0x018cf768b2f9c59c),
    (0xb5bb296f0d1d280a, 0x01f03542dfb83703),
    (0x5194f9e568323906, 0x01362149cbd32262),
    (0xe5fa385ec23ec747, 0x0183a99c3ec7eafa),
    (0x9f78c67672ce7919, 0x01e494034e79e5b9),
    (0x03ab7c0a07c10bb0, 0x012edc82110c2f94),
    (0x04965b0c89b14e9c, 0x017a93a2954f3b79),
    (0x45bbf1cfac1da243, 0x01d9388b3aa30a57),
    (0x8b957721cb92856a, 0x0127c35704a5e676),
    (0x2e7ad4ea3e7726c4, 0x0171b42cc5cf6014),
    (0x3a198a24ce14f075, 0x01ce2137f7433819),
    (0xc44ff65700cd1649, 0x0120d4c2fa8a030f),
    (0xb563f3ecc1005bdb, 0x016909f3b92c83d3),
    (0xa2bcf0e7f14072d2, 0x01c34c70a777a4c8),
    (0x65b61690f6c847c3, 0x011a0fc668aac6fd),
    (0xbf239c35347a59b4, 0x016093b802d578bc),
    (0xeeec83428198f021, 0x01b8b8a6038ad6eb),
    (0x7553d20990ff9615, 0x01137367c236c653),
    (0x52a8c68bf53f7b9a, 0x01585041b2c477e8),
    (0x6752f82ef28f5a81, 0x01ae64521f7595e2),
    (0x8093db1d57999890, 0x010cfeb353a97dad),
    (0xe0b8d1e4ad7ffeb4, 0x01503e602893dd18),
    (0x18e7065dd8dffe62, 0x01a44df832b8d45f),
    (0x6f9063faa78bfefd, 0x0106b0bb1fb384bb),
    (0x4b747cf9516efebc, 0x01485ce9e7a065ea),
    (0xde519c37a5cabe6b, 0x019a742461887f64),
    (0x0af301a2c79eb703, 0x01008896bcf54f9f),
    (0xcdafc20b798664c4, 0x0140aabc6c32a386),
    (0x811bb28e57e7fdf5, 0x0190d56b873f4c68),
    (0xa1629f31ede1fd72, 0x01f50ac6690f1f82),
    (0xa4dda37f34ad3e67, 0x013926bc01a973b1),
    (0x0e150c5f01d88e01, 0x0187706b0213d09e),
    (0x919a4f76c24eb181, 0x01e94c85c298c4c5),
    (0x7b0071aa39712ef1, 0x0131cfd3999f7afb),
    (0x59c08e14c7cd7aad, 0x017e43c8800759ba),
    (0xf030b199f9c0d958, 0x01ddd4baa0093028),
    (0x961e6f003c1887d7, 0x012aa4f4a405be19),
    (0xfba60ac04b1ea9cd, 0x01754e31cd072d9f),
    (0xfa8f8d705de65440, 0x01d2a1be4048f907),
    (0xfc99b8663aaff4a8, 0x0123a516e82d9ba4),
    (0x3bc0267fc95bf1d2, 0x016c8e5ca239028e),
    (0xcab0301fbbb2ee47, 0x01c7b1f3cac74331),
    (0x1eae1e13d54fd4ec, 0x011ccf385ebc89ff),
    (0xe659a598caa3ca27, 0x01640306766bac7e),
    (0x9ff00efefd4cbcb1, 0x01bd03c81406979e),
    (0x23f6095f5e4ff5ef, 0x0116225d0c841ec3),
    (0xecf38bb735e3f36a, 0x015baaf44fa52673),
    (0xe8306ea5035cf045, 0x01b295b1638e7010),
    (0x911e4527221a162b, 0x010f9d8ede39060a),
    (0x3565d670eaa09bb6, 0x015384f295c7478d),
    (0x82bf4c0d2548c2a3, 0x01a8662f3b391970),
    (0x51b78f88374d79a6, 0x01093fdd8503afe6),
    (0xe625736a4520d810, 0x014b8fd4e6449bdf),
    (0xdfaed044d6690e14, 0x019e73ca1fd5c2d7),
    (0xebcd422b0601a8cc, 0x0103085e53e599c6),
    (0xa6c092b5c78212ff, 0x0143ca75e8df0038),
    (0xd070b763396297bf, 0x0194bd136316c046),
    (0x848ce53c07bb3daf, 0x01f9ec583bdc7058),
    (0x52d80f4584d5068d, 0x013c33b72569c637),
    (0x278e1316e60a4831, 0x018b40a4eec437c5),
];
